use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Anything the parser can pull tokens from.
///
/// Implementations must keep returning an `EOF` token once their input is
/// exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

// Tried in order; every regex is anchored at the cursor.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ];
}

/// Streaming tokenizer over a source string.
///
/// Tokens are produced on demand through [`TokenSource::next_token`]. A
/// character no pattern accepts becomes a single `Illegal` token so the
/// stream itself never fails.
pub struct Lexer {
    tokens: VecDeque<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: VecDeque::new(),
            source: source.to_string(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_for(&self, len: usize) -> Span {
        Span {
            start: Position::new(self.pos, &self.file),
            end: Position::new(self.pos + len, &self.file),
        }
    }

    fn step(&mut self) {
        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(self.remainder()) {
                let matched = found.as_str().to_string();
                (pattern.handler)(self, matched);
                return;
            }
        }

        let illegal = self.remainder().chars().next().map(String::from).unwrap_or_default();
        let span = self.span_for(illegal.len());
        self.advance_n(illegal.len());
        self.push(MK_TOKEN!(TokenKind::Illegal, illegal, span));
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        while self.tokens.is_empty() && !self.at_eof() {
            self.step();
        }

        let token = match self.tokens.pop_front() {
            Some(token) => token,
            None => MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_for(0)),
        };

        trace!("lexed {} {:?}", token.kind, token.value);
        token
    }
}

fn number_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_for(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
}

fn skip_handler(lexer: &mut Lexer, matched: String) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: String) {
    let span = lexer.span_for(matched.len());
    lexer.advance_n(matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(MK_TOKEN!(*kind, matched, span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, matched, span));
    }
}

/// Replays an already tokenized stream, then yields `EOF` forever.
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.iter().rev().find(|token| token.kind == TokenKind::EOF) {
            Some(token) => token.clone(),
            None => MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: Position::null(), end: Position::null() }
            ),
        };

        TokenStream {
            tokens: tokens.into(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }
}

/// Tokenizes the whole of `source`, including the trailing `EOF` token.
///
/// Fails on the first character that does not start any token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        match token.kind {
            TokenKind::Illegal => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: token.value }, token.span.start));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
