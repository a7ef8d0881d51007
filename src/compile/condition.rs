//! Boolean/comparison/predicate sub-tree → symbolic condition.
//!
//! Absence is a first-class outcome: an empty socket, an unknown operand,
//! or a combinator with an unparsable side all yield `None`, and the
//! callers store that `None` as-is. Nothing synthesizes a default
//! condition.

use crate::normalize::{LogicOp, Node};
use crate::program::{ComparisonOp, Condition, Expr};

use super::expr::parse_expr;

pub fn parse_condition(node: Option<&Node>) -> Option<Condition> {
    let node = node?;
    match node {
        Node::Boolean { value } => Some(Condition::Boolean { value: *value }),

        Node::LogicCompare { op, left, right } => Some(compare_sockets(
            *op,
            left.as_deref(),
            right.as_deref(),
        )),

        Node::Comparison { op, left, value } => {
            Some(compare_literal(*op, left.as_deref(), *value))
        }

        Node::ColorPredicate { color } => {
            Some(Condition::predicate(color.predicate_name(), true))
        }

        Node::Counter { kind } => Some(Condition::predicate(kind.predicate_name(), true)),

        Node::BooleanEquals { left, right } => {
            Some(boolean_equals(left.as_deref(), right.as_deref()))
        }

        Node::ConditionWrapper { inner } => parse_condition(inner.as_deref()),

        Node::LogicOperation { op, left, right } => {
            // All or nothing: a combinator never surfaces with only one
            // parsed side.
            let lhs = parse_condition(left.as_deref())?;
            let rhs = parse_condition(right.as_deref())?;
            let conditions = vec![lhs, rhs];
            Some(match op {
                LogicOp::And => Condition::And { conditions },
                LogicOp::Or => Condition::Or { conditions },
            })
        }

        _ => None,
    }
}

/// Named predicate reference usable as the left side of a threshold
/// comparison (`checkWarehouse() >= n`).
fn predicate_ref(node: Option<&Node>) -> Option<&'static str> {
    match node {
        Some(Node::Counter { kind }) => Some(kind.predicate_name()),
        _ => None,
    }
}

/// Comparison with two expression sockets.
fn compare_sockets(op: ComparisonOp, left: Option<&Node>, right: Option<&Node>) -> Condition {
    if let Some(function_name) = predicate_ref(left) {
        Condition::Predicate {
            function_name: function_name.into(),
            operator: Some(op),
            value: Some(parse_expr(right)),
            check: true,
        }
    } else {
        Condition::VariableComparison {
            variable: parse_expr(left),
            operator: op,
            value: parse_expr(right),
        }
    }
}

/// Comparison whose right side is a literal field rather than a socket.
fn compare_literal(op: ComparisonOp, left: Option<&Node>, value: i64) -> Condition {
    if let Some(function_name) = predicate_ref(left) {
        Condition::Predicate {
            function_name: function_name.into(),
            operator: Some(op),
            value: Some(Expr::Number(value)),
            check: true,
        }
    } else {
        Condition::VariableComparison {
            variable: parse_expr(left),
            operator: op,
            value: Expr::Number(value),
        }
    }
}

/// Boolean-equals folds a color predicate on either side into a predicate
/// check, taking the other side's literal boolean as the expected value;
/// anything else falls back to a generic equality comparison.
fn boolean_equals(left: Option<&Node>, right: Option<&Node>) -> Condition {
    match (left, right) {
        (Some(Node::ColorPredicate { color }), other)
        | (other, Some(Node::ColorPredicate { color })) => {
            let check = match other {
                Some(Node::Boolean { value }) => *value,
                _ => true,
            };
            Condition::predicate(color.predicate_name(), check)
        }
        (lhs, rhs) => Condition::VariableComparison {
            variable: parse_expr(lhs),
            operator: ComparisonOp::Eq,
            value: parse_expr(rhs),
        },
    }
}
