use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnknownStatement { .. } => "UnknownStatement",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedAssignment { .. } => "ExpectedAssignment",
            ErrorImpl::MissingCloseParen { .. } => "MissingCloseParen",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnknownStatement { token } => {
                ErrorTip::Suggestion(format!("Unknown statement: `{}`", token))
            }
            ErrorImpl::ExpectedType { token } => ErrorTip::Suggestion(format!(
                "Expected type of variable (only `number` is supported) after colon: `{}`",
                token
            )),
            ErrorImpl::ExpectedAssignment { token } => ErrorTip::Suggestion(format!(
                "Expected assignment operator after type declaration: `{}`",
                token
            )),
            ErrorImpl::MissingCloseParen { token } => {
                ErrorTip::Suggestion(format!("Expected `)`, found `{}`", token))
            }
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unknown statement: {token:?}")]
    UnknownStatement { token: String },
    #[error("expected type after colon: {token:?}")]
    ExpectedType { token: String },
    #[error("expected assignment operator after type: {token:?}")]
    ExpectedAssignment { token: String },
    #[error("expected closing parenthesis: {token:?}")]
    MissingCloseParen { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
