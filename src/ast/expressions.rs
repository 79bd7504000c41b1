use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Arithmetic operators a binary expression can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    /// Operators at `+`/`-` precedence.
    pub fn additive(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            _ => None,
        }
    }

    /// Operators at `*`/`/`/`%` precedence.
    pub fn multiplicative(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expression
///
/// Every sub-expression is owned by exactly one parent, so trees are finite
/// and never share nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    NumberLiteral {
        value: i64,
    },
    Variable {
        name: String,
    },
    Binary {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: i64) -> Expr {
        Expr::NumberLiteral { value }
    }

    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable { name: name.into() }
    }

    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

// Binary expressions print fully parenthesised so grouping is visible.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::NumberLiteral { value } => write!(f, "{}", value),
            Expr::Variable { name } => write!(f, "{}", name),
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", left, operator, right)
            }
        }
    }
}
