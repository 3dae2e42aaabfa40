//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of a named source
//! - `MK_NODE_EQ!` - Structural equality for AST nodes, ignoring spans

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a Span from a start and end byte offset in the given source.
///
/// # Arguments
///
/// * `$start` - Start offset (inclusive)
/// * `$end` - End offset (exclusive)
/// * `$file` - `Arc<String>` naming the source
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        $crate::Span {
            start: $crate::Position(($start) as u32, ::std::sync::Arc::clone(&$file)),
            end: $crate::Position(($end) as u32, ::std::sync::Arc::clone(&$file)),
        }
    };
}

/// Implements `PartialEq` for an AST node by comparing the listed fields.
///
/// Spans are left out so a node equals the same node parsed from a
/// different position or rendering.
///
/// # Example
///
/// ```ignore
/// MK_NODE_EQ!(InfixExpr; left, operator, right);
/// ```
#[macro_export]
macro_rules! MK_NODE_EQ {
    ($node:ty; $($field:ident),+) => {
        impl PartialEq for $node {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }
    };
}
