use std::fmt::Display;

use crate::errors::errors::Error;

use super::statements::{Assignment, PrintStatement, VarDeclaration};

/// Top-level node
///
/// One per successfully parsed statement. Nodes hold no reference back to
/// the parser or the tokens they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    VarDeclaration(VarDeclaration),
    Assignment(Assignment),
    PrintStatement(PrintStatement),
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::VarDeclaration(declaration) => write!(f, "{}", declaration),
            Node::Assignment(assignment) => write!(f, "{}", assignment),
            Node::PrintStatement(print) => write!(f, "{}", print),
        }
    }
}

/// Outcome of parsing a single top-level statement.
///
/// `node` is absent when the statement failed to parse. `diagnostic` is set
/// when that failure was reported; a statement can also end silently with
/// neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    pub node: Option<Node>,
    pub diagnostic: Option<Error>,
}

/// Every statement outcome of one parse, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<ParsedStatement>,
}

impl Program {
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.statements.iter().filter_map(|statement| statement.node.as_ref())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Error> {
        self.statements
            .iter()
            .filter_map(|statement| statement.diagnostic.as_ref())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().next().is_some()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.statements
            .into_iter()
            .filter_map(|statement| statement.node)
            .collect()
    }
}
