//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer literals, operators and
//! punctuation, comments, end-of-stream behaviour and error cases.

use super::{
    lexer::{tokenize, Lexer, TokenSource, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.ns".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("show number", Some("test.ns".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Show);
    assert_eq!(tokens[0].value, "show");
    assert_eq!(tokens[1].kind, TokenKind::NumberType);
    assert_eq!(tokens[1].value, "number");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("shows numbers", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "shows");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "numbers");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 1000", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "1000");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % = : ( )"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Assignment,
            TokenKind::Colon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("x:number=5"),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::NumberType,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("show 1 // trailing comment\n// whole line\nshow 2"),
        vec![
            TokenKind::Show,
            TokenKind::Number,
            TokenKind::Show,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_slash_is_not_a_comment() {
    assert_eq!(
        kinds("a / b"),
        vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("x = 12", Some("test.ns".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 1);
    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[2].span.start.0, 4);
    assert_eq!(tokens[2].span.end.0, 6);
    assert_eq!(tokens[3].span.start.0, 6);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.ns");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x", None).unwrap();
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("x = 1 $ 2", None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_lexer_emits_illegal_token() {
    let mut lexer = Lexer::new("@x", None);

    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.value, "@");

    let ident = lexer.next_token();
    assert_eq!(ident.kind, TokenKind::Identifier);
    assert_eq!(ident.span.start.0, 1);
}

#[test]
fn test_illegal_multibyte_character() {
    let mut lexer = Lexer::new("é1", None);

    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.value, "é");
    assert_eq!(lexer.next_token().value, "1");
}

#[test]
fn test_lexer_eof_is_idempotent() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_replays_then_repeats_eof() {
    let tokens = tokenize("show 1", None).unwrap();
    let eof_span = tokens[2].span.clone();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Show);
    assert_eq!(stream.next_token().kind, TokenKind::Number);
    for _ in 0..3 {
        let token = stream.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.span, eof_span);
    }
}

#[test]
fn test_empty_token_stream() {
    let mut stream = TokenStream::new(vec![]);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}
