/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Top-level nodes and the parsed program
/// - expressions: Arithmetic expressions and their operators
/// - statements: Declaration, assignment and print statements
pub mod ast;
pub mod expressions;
pub mod statements;
