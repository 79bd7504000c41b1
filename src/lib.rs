#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source file, paired with the file's name.
///
/// Offsets are 32-bit. Anything past `u32::MAX` is clamped to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn new(offset: usize, file: &Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), Rc::clone(file))
    }

    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` in one go.
///
/// `file` names the source in diagnostic positions and defaults to `shell`.
pub fn parse_source(source: &str, file: Option<String>) -> Program {
    Parser::new(Lexer::new(source, file)).parse_program()
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text, and the character column
/// within that line. Offsets at or past the end of `source` point just after
/// the last character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line[..pos - start].chars().count();
            return (line_number, line.to_string(), column);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            (line_number - 1, line.to_string(), line.chars().count())
        }
        _ => (line_number, String::new(), 0),
    }
}

/// Renders a diagnostic against the source it was produced from.
///
/// ```text
/// Error: ExpectedAssignment (Expected assignment operator after type declaration: `5`)
/// -> shell
///   |
/// 1 | x: number 5
///   | ----------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("-> {}", position.1));
    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    lines.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_position_offset_is_clamped() {
        let file = Rc::new("big.ns".to_string());

        assert_eq!(Position::new(42, &file).0, 42);
        assert_eq!(Position::new(u32::MAX as usize, &file).0, u32::MAX);
        assert_eq!(Position::new(usize::MAX, &file).0, u32::MAX);
        assert_eq!(Position::new(0, &file).1.as_str(), "big.ns");
    }

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\n  Testing { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 29);
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("show x +", 8);
        assert_eq!(line_number, 1);
        assert_eq!(line, "show x +");
        assert_eq!(line_pos, 8);

        let (line_number, line, line_pos) = super::get_line_at_position("a\n", 2);
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        let (line_number, _, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::ExpectedAssignment {
                token: "5".to_string(),
            },
            Position(10, Rc::new("test.ns".to_string())),
        );

        let rendered = super::format_error(&error, "x: number 5");
        let expected = [
            "Error: ExpectedAssignment (Expected assignment operator after type declaration: `5`)",
            "-> test.ns",
            "  |",
            "1 | x: number 5",
            "  | ----------^",
        ]
        .join("\n");

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_format_error_strips_indentation() {
        let error = Error::new(
            ErrorImpl::UnknownStatement {
                token: "+".to_string(),
            },
            Position(9, Rc::new("test.ns".to_string())),
        );

        let rendered = super::format_error(&error, "show 1\n  + 2");
        assert!(rendered.ends_with("2 | + 2\n  | ^"));
    }
}
