use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Span, MK_NODE_EQ};

use super::{
    ast::{Expr, Operator},
    statements::BlockStmt,
};

// LITERALS

/// Identifier
/// A name. Nothing is resolved at parse time.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub value: String,
    pub span: Span,
}

MK_NODE_EQ!(Identifier; value);

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

MK_NODE_EQ!(IntegerLiteral; value);

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

/// Boolean Expression
/// `true` or `false`.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

MK_NODE_EQ!(BooleanExpr; value);

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value)
    }
}

// OPERATORS

/// Prefix Expression
/// `!right` or `-right`. Prefix operators bind tighter than any infix
/// operator, so no parentheses are needed around them.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Operator,
    pub right: Box<Expr>,
    pub span: Span,
}

MK_NODE_EQ!(PrefixExpr; operator, right);

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.operator, self.right)
    }
}

/// Infix Expression
/// A binary operation, rendered fully parenthesised so precedence is visible.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
    pub span: Span,
}

MK_NODE_EQ!(InfixExpr; left, operator, right);

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

// CONTROL FLOW AND FUNCTIONS

/// If Expression
/// `if (<condition>) { .. } else { .. }`; the else branch is optional.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

MK_NODE_EQ!(IfExpr; condition, consequence, alternative);

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Literal
/// `fn(<parameters>) { <body> }`
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
    pub span: Span,
}

MK_NODE_EQ!(FunctionLiteral; parameters, body);

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(f, "fn({}) {}", parameters.join(", "), self.body)
    }
}

/// Call Expression
/// `<function>(<arguments>)`; the callee is any expression.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

MK_NODE_EQ!(CallExpr; function, arguments);

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        match self.function.as_ref() {
            // `-f(x)` would read back as `-(f(x))`
            Expr::Prefix(_) => write!(f, "({})({})", self.function, arguments.join(", ")),
            _ => write!(f, "{}({})", self.function, arguments.join(", ")),
        }
    }
}
