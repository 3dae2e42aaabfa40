use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Span, MK_NODE_EQ};

use super::{
    ast::{write_statements, Expr, Stmt},
    expressions::Identifier,
};

/// Let Statement
/// Binds the value of an expression to a name: `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub name: Identifier,
    pub value: Expr,
    pub span: Span,
}

MK_NODE_EQ!(LetStmt; name, value);

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

/// Return Statement
/// `return <value>;`, or a bare `return;`.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

MK_NODE_EQ!(ReturnStmt; value);

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.value {
            Some(value) => write!(f, "return {};", value),
            None => write!(f, "return;"),
        }
    }
}

/// Expression Statement
/// A lone expression, e.g. `add(1, 2);`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

MK_NODE_EQ!(ExpressionStmt; expression);

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.expression)
    }
}

/// Block Statement
/// A brace-delimited statement list, the body of an `if` branch or a function.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

MK_NODE_EQ!(BlockStmt; statements);

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}
