//! Normalization phase: stringly workspace blocks → closed `Node` tree.
//!
//! All duck-typed lookups happen here, once per compile: multi-candidate
//! field names, operator code mapping, collect-prefix matching, rotate
//! direction defaulting, and the expandable-if branch bookkeeping. The
//! layers above never see a raw field map.

pub mod node;

pub use node::*;

use std::collections::HashMap;

use serde_json::Value;

use crate::error::CompileError;
use crate::parse::graph::LinkGraph;
use crate::parse::types::{Workspace, WorkspaceBlock};
use crate::program::{ArithOp, CollectColor, ComparisonOp};

/// Candidate field names for a function's name, in lookup order.
const FUNCTION_NAME_FIELDS: &[&str] = &["NAME", "FUNCTION_NAME", "PROCNAME"];
/// Candidate field names for a variable's name.
const VARIABLE_NAME_FIELDS: &[&str] = &["VAR", "NAME"];

/// The workspace reduced to its top-level chains, each a normalized
/// node sequence in `next`-link order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGraph {
    pub chains: Vec<Vec<Node>>,
}

pub fn normalize(workspace: &Workspace) -> Result<NormalizedGraph, CompileError> {
    let graph = LinkGraph::build(workspace);
    graph.check_acyclic()?;

    let by_id: HashMap<&str, &WorkspaceBlock> = workspace
        .blocks
        .iter()
        .map(|b| (b.id.as_str(), b))
        .collect();

    let chains = graph
        .roots()
        .into_iter()
        .map(|head| build_chain(Some(head), &by_id))
        .collect();

    Ok(NormalizedGraph { chains })
}

type BlockMap<'a> = HashMap<&'a str, &'a WorkspaceBlock>;

fn build_chain(head: Option<&str>, by_id: &BlockMap) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut current = head;
    while let Some(id) = current {
        // A dangling next-id ends the chain; the blocks before it stand.
        let Some(block) = by_id.get(id) else { break };
        nodes.push(build_node(block, by_id));
        current = block.next.as_deref();
    }
    nodes
}

fn socket(block: &WorkspaceBlock, name: &str, by_id: &BlockMap) -> Option<Box<Node>> {
    block
        .input(name)
        .and_then(|id| by_id.get(id))
        .map(|child| Box::new(build_node(child, by_id)))
}

fn statement_chain(block: &WorkspaceBlock, name: &str, by_id: &BlockMap) -> Vec<Node> {
    build_chain(block.statement(name), by_id)
}

fn build_node(block: &WorkspaceBlock, by_id: &BlockMap) -> Node {
    let tag = block.block_type.as_str();

    // Prefix match ahead of the exact-name cases so new collect variants
    // still compile to a collect action.
    if tag.starts_with("collect") {
        return Node::Collect {
            color: collect_color(tag),
            count: socket(block, "COUNT", by_id),
        };
    }

    match tag {
        "start" => Node::Start,

        "move_forward" => Node::MoveForward {
            steps: socket(block, "STEPS", by_id),
        },
        "rotate" => Node::Rotate {
            direction: rotate_direction(block),
        },
        "turn_back" => Node::TurnBack,
        "take_box" => Node::TakeBox,
        "put_box" => Node::PutBox,

        "repeat" => Node::Repeat {
            times: socket(block, "TIMES", by_id),
            body: statement_chain(block, "DO", by_id),
        },
        "repeat_range" => Node::RepeatRange {
            variable: socket(block, "VAR", by_id),
            from: socket(block, "FROM", by_id),
            to: socket(block, "TO", by_id),
            step: socket(block, "BY", by_id),
            body: statement_chain(block, "DO", by_id),
        },
        "while" => Node::While {
            condition: socket(block, "CONDITION", by_id),
            body: statement_chain(block, "DO", by_id),
        },
        "if" => Node::If {
            condition: socket(block, "CONDITION", by_id),
            then_body: statement_chain(block, "DO", by_id),
            else_body: block
                .has_statement("ELSE")
                .then(|| statement_chain(block, "ELSE", by_id)),
        },
        "if_expandable" => build_if_expandable(block, by_id),

        // The editor exports its own tag and the stock procedure tag for
        // the same block kind.
        "function_def" | "procedures_defnoreturn" => Node::FunctionDef {
            name: block.first_populated_field(FUNCTION_NAME_FIELDS),
            body: statement_chain(block, "STACK", by_id),
        },
        "function_call" | "procedures_callnoreturn" => Node::FunctionCall {
            name: block.first_populated_field(FUNCTION_NAME_FIELDS),
        },

        "number" => Node::Number {
            value: numeric_field(block, "NUM"),
        },
        "variable" => Node::Variable {
            name: block
                .first_populated_field(VARIABLE_NAME_FIELDS)
                .unwrap_or_else(|| "i".into()),
        },
        "arithmetic" => Node::Arithmetic {
            op: arith_op(block.field_str("OP")),
            left: socket(block, "A", by_id),
            right: socket(block, "B", by_id),
        },

        "boolean" => Node::Boolean {
            value: boolean_field(block, "BOOL"),
        },
        "logic_compare" => Node::LogicCompare {
            op: comparison_op(
                block
                    .field_str("OPERATOR")
                    .or_else(|| block.field_str("OP")),
            ),
            left: socket(block, "LEFT", by_id),
            right: socket(block, "RIGHT", by_id),
        },
        "comparison" => Node::Comparison {
            op: comparison_op(block.field_str("OP")),
            left: socket(block, "A", by_id),
            value: numeric_field(block, "B"),
        },
        "logic_operation" => Node::LogicOperation {
            op: logic_op(block.field_str("OP")),
            // Two socket naming schemes exist for the same operand slots.
            left: socket(block, "LEFT", by_id).or_else(|| socket(block, "A", by_id)),
            right: socket(block, "RIGHT", by_id).or_else(|| socket(block, "B", by_id)),
        },
        "condition" => Node::ConditionWrapper {
            inner: socket(block, "CONDITION", by_id),
        },
        "boolean_equals" => Node::BooleanEquals {
            left: socket(block, "LEFT", by_id),
            right: socket(block, "RIGHT", by_id),
        },

        "is_green" => Node::ColorPredicate {
            color: PredicateColor::Green,
        },
        "is_red" => Node::ColorPredicate {
            color: PredicateColor::Red,
        },
        "is_yellow" => Node::ColorPredicate {
            color: PredicateColor::Yellow,
        },
        "warehouse_count" => Node::Counter {
            kind: CounterKind::Warehouse,
        },
        "pin_count" => Node::Counter {
            kind: CounterKind::Pin,
        },

        other => Node::Unknown {
            block_type: other.to_string(),
        },
    }
}

fn build_if_expandable(block: &WorkspaceBlock, by_id: &BlockMap) -> Node {
    let branch_count = block
        .extra_state
        .as_ref()
        .map(|s| s.else_if_count)
        .unwrap_or(0);

    let mut branches = Vec::new();
    for i in 1..=branch_count {
        let if_socket = format!("IF{}", i);
        let do_socket = format!("DO{}", i);
        // A branch exists only when both of its sockets do; a half-built
        // branch is skipped entirely rather than padded.
        if block.has_input(&if_socket) && block.has_statement(&do_socket) {
            branches.push(ElseIfBranch {
                condition: socket(block, &if_socket, by_id).map(|n| *n),
                body: statement_chain(block, &do_socket, by_id),
            });
        }
    }

    Node::IfExpandable {
        condition: socket(block, "IF0", by_id),
        then_body: statement_chain(block, "DO0", by_id),
        branch_count,
        branches,
        else_body: block
            .has_statement("ELSE")
            .then(|| statement_chain(block, "ELSE", by_id)),
    }
}

// ---------------------------------------------------------------------------
// Field decoding, with the silent-fallback defaults of the source blocks
// ---------------------------------------------------------------------------

fn collect_color(tag: &str) -> CollectColor {
    match tag.trim_start_matches("collect").trim_start_matches('_') {
        "red" => CollectColor::Red,
        "yellow" => CollectColor::Yellow,
        _ => CollectColor::Green,
    }
}

fn rotate_direction(block: &WorkspaceBlock) -> RotateDirection {
    match block.field_str("DIRECTION") {
        Some("LEFT") => RotateDirection::Left,
        Some("BACK") => RotateDirection::Back,
        // Absent or unrecognized directions turn right by convention.
        _ => RotateDirection::Right,
    }
}

/// Integer field value; accepts raw numbers and numeric strings,
/// anything else folds to 0.
fn numeric_field(block: &WorkspaceBlock, name: &str) -> i64 {
    match block.field(name) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Boolean dropdown field; the editor stores `"TRUE"`/`"FALSE"` strings
/// and defaults to true.
fn boolean_field(block: &WorkspaceBlock, name: &str) -> bool {
    match block.field(name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s != "FALSE",
        _ => true,
    }
}

fn arith_op(code: Option<&str>) -> ArithOp {
    match code {
        Some("MINUS") => ArithOp::Subtract,
        Some("MULTIPLY") => ArithOp::Multiply,
        Some("DIVIDE") => ArithOp::Divide,
        Some("POWER") => ArithOp::Power,
        _ => ArithOp::Add,
    }
}

fn comparison_op(code: Option<&str>) -> ComparisonOp {
    match code {
        Some("NEQ") => ComparisonOp::Neq,
        Some("LT") => ComparisonOp::Lt,
        Some("LTE") => ComparisonOp::Lte,
        Some("GT") => ComparisonOp::Gt,
        Some("GTE") => ComparisonOp::Gte,
        _ => ComparisonOp::Eq,
    }
}

fn logic_op(code: Option<&str>) -> LogicOp {
    match code {
        Some("OR") => LogicOp::Or,
        _ => LogicOp::And,
    }
}
