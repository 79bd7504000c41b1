use crate::{
    ast::{
        ast::Node,
        statements::{Assignment, PrintStatement, VarDeclaration},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{
    expr::{parse_complete_expr, parse_integer},
    parser::Parser,
};

/// Parses one top-level statement starting at the current token.
///
/// `Ok(None)` means the statement produced nothing without anything worth
/// reporting. On success the current token is the statement's last token.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Option<Node>, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_assignment_or_declaration(parser),
        TokenKind::Show => Ok(Some(parse_print_stmt(parser)?)),
        _ => Err(Error::new(
            ErrorImpl::UnknownStatement {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_assignment_or_declaration<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<Option<Node>, Error> {
    let identifier = parser.current_token().value.clone();
    parser.advance();

    match parser.current_token_kind() {
        TokenKind::Colon => {
            parser.advance();
            if parser.current_token_kind() != TokenKind::NumberType {
                return Err(Error::new(
                    ErrorImpl::ExpectedType {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ));
            }

            parser.advance();
            if parser.current_token_kind() != TokenKind::Assignment {
                return Err(Error::new(
                    ErrorImpl::ExpectedAssignment {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ));
            }

            // Declarations take a single literal, not an expression.
            parser.advance();
            let value = parse_integer(parser)?;

            Ok(Some(Node::VarDeclaration(VarDeclaration {
                name: identifier,
                value,
            })))
        }
        TokenKind::Assignment => {
            parser.advance();
            let expression = parse_complete_expr(parser)?;

            Ok(Some(Node::Assignment(Assignment {
                var_name: identifier,
                expression,
            })))
        }
        _ => Ok(None),
    }
}

pub fn parse_print_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.advance();
    let expression = parse_complete_expr(parser)?;

    Ok(Node::PrintStatement(PrintStatement { expression }))
}
