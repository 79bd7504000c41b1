use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("show", TokenKind::Show);
        map.insert("number", TokenKind::NumberType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Colon,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Show,
    NumberType,
}

impl TokenKind {
    /// Whether this kind is one of the arithmetic operators `+ - * / %`.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}
