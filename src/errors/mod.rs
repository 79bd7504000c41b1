//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while tokenizing and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each malformed construct
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
