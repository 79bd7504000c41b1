//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns a stream of
//! tokens into top-level nodes. It handles:
//!
//! - Statement dispatch (declarations, assignments, `show`)
//! - Expression parsing by precedence climbing (expression, term, factor)
//! - Per-statement diagnostics that never abort the parse
//!
//! Lookahead is fixed at two tokens, current and peek.

pub mod expr;
pub mod parser;
pub mod stmt;
