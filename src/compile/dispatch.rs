//! Tree walker: per-node conversion and sequence flattening.
//!
//! `convert_node` is the single dispatch point from normalized blocks to
//! actions. Nodes that only make sense as operands of an expression or
//! condition, the start block, function definitions, and unknown blocks
//! all convert to `None` and contribute nothing to the chain.

use crate::normalize::{ElseIfBranch, Node, RotateDirection};
use crate::program::{Action, ElseIfClause, Expr};

use super::condition::parse_condition;
use super::expr::{parse_expr, parse_expr_or};

/// Convert a chain of nodes into actions, in encounter order. Nodes that
/// convert to nothing are dropped silently.
pub fn convert_chain(chain: &[Node]) -> Vec<Action> {
    chain.iter().filter_map(convert_node).collect()
}

pub fn convert_node(node: &Node) -> Option<Action> {
    match node {
        Node::MoveForward { steps } => Some(Action::Forward {
            count: parse_expr(steps.as_deref()),
        }),

        Node::Rotate { direction } => Some(match direction {
            RotateDirection::Left => Action::TurnLeft,
            RotateDirection::Back => Action::TurnBack,
            RotateDirection::Right => Action::TurnRight,
        }),

        Node::TurnBack => Some(Action::TurnBack),

        Node::Collect { color, count } => Some(Action::Collect {
            count: parse_expr_or(count.as_deref(), 1),
            color: *color,
        }),

        Node::TakeBox => Some(Action::TakeBox { count: 1 }),
        Node::PutBox => Some(Action::PutBox { count: 1 }),

        Node::Repeat { times, body } => Some(Action::Repeat {
            count: parse_expr(times.as_deref()),
            body: convert_chain(body),
        }),

        Node::RepeatRange {
            variable,
            from,
            to,
            step,
            body,
        } => Some(Action::RepeatRange {
            variable: range_variable(variable.as_deref()),
            from: range_bound(from.as_deref(), 1),
            to: range_bound(to.as_deref(), 5),
            step: range_bound(step.as_deref(), 1),
            body: convert_chain(body),
        }),

        Node::While { condition, body } => Some(Action::While {
            cond: parse_condition(condition.as_deref()),
            body: convert_chain(body),
        }),

        Node::If {
            condition,
            then_body,
            else_body,
        } => Some(Action::If {
            cond: parse_condition(condition.as_deref()),
            then: convert_chain(then_body),
            else_if: None,
            else_branch: else_body.as_deref().map(convert_chain),
        }),

        Node::IfExpandable {
            condition,
            then_body,
            branches,
            else_body,
            ..
        } => Some(convert_if_expandable(
            condition.as_deref(),
            then_body,
            branches,
            else_body.as_deref(),
        )),

        Node::FunctionCall { name } => Some(Action::CallFunction {
            function_name: name.clone().unwrap_or_else(|| "myFunction".into()),
        }),

        // Structural and operand-only nodes never emit an action, and
        // neither does anything the compiler does not recognize.
        Node::Start
        | Node::FunctionDef { .. }
        | Node::Number { .. }
        | Node::Variable { .. }
        | Node::Arithmetic { .. }
        | Node::Boolean { .. }
        | Node::LogicCompare { .. }
        | Node::Comparison { .. }
        | Node::LogicOperation { .. }
        | Node::ConditionWrapper { .. }
        | Node::BooleanEquals { .. }
        | Node::ColorPredicate { .. }
        | Node::Counter { .. }
        | Node::Unknown { .. } => None,
    }
}

fn convert_if_expandable(
    condition: Option<&Node>,
    then_body: &[Node],
    branches: &[ElseIfBranch],
    else_body: Option<&[Node]>,
) -> Action {
    let else_if: Vec<ElseIfClause> = branches
        .iter()
        .map(|branch| ElseIfClause {
            cond: parse_condition(branch.condition.as_ref()),
            then: convert_chain(&branch.body),
        })
        .collect();

    // The trailing else only materializes when its chain yields at least
    // one action.
    let else_branch = else_body.map(convert_chain).filter(|a| !a.is_empty());

    Action::If {
        cond: parse_condition(condition),
        then: convert_chain(then_body),
        else_if: (!else_if.is_empty()).then_some(else_if),
        else_branch,
    }
}

/// Loop-bound token: empty socket → literal default; otherwise a literal,
/// a variable token, or a whole arithmetic expression.
fn range_bound(node: Option<&Node>, default: i64) -> Expr {
    match node {
        None => Expr::Number(default),
        some => parse_expr(some),
    }
}

/// Loop variable name; anything but a variable reference falls back to `i`.
fn range_variable(node: Option<&Node>) -> String {
    match node {
        Some(Node::Variable { name }) => name.clone(),
        _ => "i".into(),
    }
}
