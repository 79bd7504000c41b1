use crate::{
    ast::expressions::{BinaryOperator, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::parser::Parser;

// Expression rules never stop early on a bad operand. The failure is
// reported on the parser and the rule returns `None`, but the surrounding
// loops keep consuming operators and operands so the cursor ends where a
// well-formed expression of the same shape would have left it.

/// expression -> term (('+' | '-') term)*
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let mut left = parse_term(parser);

    while let Some(operator) = BinaryOperator::additive(parser.current_token_kind()) {
        parser.advance();
        let right = parse_term(parser);
        left = combine(left, operator, right);
    }

    left
}

/// term -> factor (('*' | '/' | '%') factor)*
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let mut left = parse_factor(parser);

    while let Some(operator) = BinaryOperator::multiplicative(parser.current_token_kind()) {
        parser.advance();
        let right = parse_factor(parser);
        left = combine(left, operator, right);
    }

    left
}

fn combine(left: Option<Expr>, operator: BinaryOperator, right: Option<Expr>) -> Option<Expr> {
    Some(Expr::binary(left?, operator, right?))
}

/// factor -> NUMBER | IDENT | '(' expression ')'
///
/// A number or identifier only moves the cursor when an operator follows it,
/// leaving the operator current for the enclosing loop. Otherwise the operand
/// stays current as the last token of the statement.
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    match parser.current_token_kind() {
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::Identifier => {
            let name = parser.current_token().value.clone();
            if parser.peek_token_is_operator() {
                parser.advance();
            }

            Some(Expr::Variable { name })
        }
        TokenKind::Number => {
            let value = match parse_integer(parser) {
                Ok(value) => Some(value),
                Err(error) => {
                    parser.report(error);
                    None
                }
            };
            if parser.peek_token_is_operator() {
                parser.advance();
            }

            value.map(|value| Expr::NumberLiteral { value })
        }
        _ => {
            let error = Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            );
            parser.report(error);
            None
        }
    }
}

/// Parses `( expression )`, returning the inner expression itself.
///
/// The closing parenthesis is checked even when the inner expression failed.
/// On success the cursor ends one past it.
pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser);

    parser.advance();
    if parser.current_token_kind() != TokenKind::CloseParen {
        let error = Error::new(
            ErrorImpl::MissingCloseParen {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        );
        parser.report(error);
        return None;
    }
    parser.advance();

    expr
}

/// Runs a full expression and turns the first failure reported while
/// parsing it into the statement's error.
pub fn parse_complete_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let expr = parse_expr(parser);

    if let Some(error) = parser.take_error() {
        return Err(error);
    }

    expr.ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )
    })
}

/// Reads the current token as a base-10 `i64` without advancing.
pub fn parse_integer<S: TokenSource>(parser: &Parser<S>) -> Result<i64, Error> {
    let token = parser.current_token();

    if token.kind != TokenKind::Number {
        return Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            parser.get_position(),
        ));
    }

    token.value.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            parser.get_position(),
        )
    })
}
