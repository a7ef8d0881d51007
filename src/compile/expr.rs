//! Arithmetic sub-tree → symbolic expression.
//!
//! Values are never combined numerically here; evaluation belongs to the
//! downstream interpreter.

use crate::normalize::Node;
use crate::program::Expr;

/// Parse a value socket into an expression. Empty sockets and operand
/// kinds that make no sense as values fold to `Number(0)`.
pub fn parse_expr(node: Option<&Node>) -> Expr {
    match node {
        Some(Node::Number { value }) => Expr::Number(*value),
        Some(Node::Variable { name }) => Expr::variable(name),
        Some(Node::Arithmetic { op, left, right }) => Expr::arithmetic(
            *op,
            parse_expr(left.as_deref()),
            parse_expr(right.as_deref()),
        ),
        _ => Expr::Number(0),
    }
}

/// Like `parse_expr`, but an empty socket yields the given literal
/// instead of 0 (collect blocks default to one item, for example).
pub fn parse_expr_or(node: Option<&Node>, default: i64) -> Expr {
    match node {
        None => Expr::Number(default),
        some => parse_expr(some),
    }
}
