//! Abstract Syntax Tree (AST) definitions.
//!
//! This module contains the node types produced by the parser:
//!
//! - `ast` - the `Program` root, the closed `Stmt`/`Expr` enums and operators
//! - `statements` - let, return, expression and block statements
//! - `expressions` - literals, operators, `if`, function literals and calls
//!
//! Every node renders back to source text through `Display`.

pub mod ast;
pub mod expressions;
pub mod statements;
