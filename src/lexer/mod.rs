//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns source text into tokens
//! for the parser. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for diagnostics
//! - Comments and whitespace handling
//! - The `TokenSource` seam the parser reads through

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
