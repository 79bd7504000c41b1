use std::fmt::Display;

use super::expressions::Expr;

/// `name: number = value`
///
/// The value is read straight from an integer literal, never from an
/// expression. A missing or non-numeric literal is a `NumberParseError`
/// rather than a declaration of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDeclaration {
    pub name: String,
    pub value: i64,
}

/// `var_name = expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub var_name: String,
    pub expression: Expr,
}

/// `show expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintStatement {
    pub expression: Expr,
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: number = {}", self.name, self.value)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.var_name, self.expression)
    }
}

impl Display for PrintStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "show {}", self.expression)
    }
}
