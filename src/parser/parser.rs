//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop. The
//! parser keeps a two-token window (current and peek) over a
//! [`TokenSource`] and never backtracks. Statement and expression rules
//! live in the `stmt` and `expr` modules as free functions over the parser.

use log::{debug, info, warn};

use crate::{
    ast::ast::{ParsedStatement, Program},
    errors::errors::Error,
    lexer::{
        lexer::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// The parser state: the token source plus a two-token lookahead window.
pub struct Parser<S: TokenSource> {
    /// Where tokens are pulled from
    source: S,
    /// The token being examined
    current: Token,
    /// The token after `current`
    peek: Token,
    /// First failure reported inside the expression being parsed
    error: Option<Error>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and primes the lookahead window with two tokens.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        Parser {
            source,
            current,
            peek,
            error: None,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Shifts peek into current and pulls a fresh peek token.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    pub fn peek_token_is_operator(&self) -> bool {
        self.peek.kind.is_operator()
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Records a failure inside an expression. Only the first one is kept.
    pub fn report(&mut self, error: Error) {
        debug!("expression failed: {}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    /// Parses statements until the current token is `EOF`.
    ///
    /// Every statement is recorded, including ones that produced no node.
    /// After each statement the parser advances exactly once, whether or not
    /// the statement parsed, so a malformed statement may leave the following
    /// ones misaligned.
    pub fn parse_program(&mut self) -> Program {
        info!("parsing program starting at {}", self.current.span.start.1);

        let mut statements = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            debug!("parsing statement at {:?}", self.current.value);

            let statement = match parse_stmt(self) {
                Ok(node) => ParsedStatement {
                    node,
                    diagnostic: None,
                },
                Err(error) => {
                    warn!("{}", error);
                    ParsedStatement {
                        node: None,
                        diagnostic: Some(error),
                    }
                }
            };

            self.error = None;
            statements.push(statement);
            self.advance();
        }

        let program = Program { statements };
        info!(
            "parsed {} statements, {} diagnostics",
            program.statements.len(),
            program.diagnostics().count()
        );

        program
    }
}
