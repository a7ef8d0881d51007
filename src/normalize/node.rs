//! Internal block representation: one immutable variant per recognized
//! block kind, built once per compile from the externally-owned workspace.
//!
//! The dispatcher and the expression/condition parsers match exhaustively
//! over this enum. Unrecognized block types survive normalization as the
//! explicit `Unknown` variant so the "unknown → drop" policy is a stated
//! case, not a missing one.

use crate::program::{ArithOp, CollectColor, ComparisonOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

/// Bare counter sensors usable directly as conditions or as the left
/// operand of a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Warehouse,
    Pin,
}

impl CounterKind {
    pub fn predicate_name(self) -> &'static str {
        match self {
            CounterKind::Warehouse => "checkWarehouse",
            CounterKind::Pin => "checkPin",
        }
    }
}

/// Boolean color-sensor predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateColor {
    Green,
    Red,
    Yellow,
}

impl PredicateColor {
    pub fn predicate_name(self) -> &'static str {
        match self {
            PredicateColor::Green => "isGreen",
            PredicateColor::Red => "isRed",
            PredicateColor::Yellow => "isYellow",
        }
    }
}

/// One extra branch of an expandable conditional. Only branches whose
/// condition AND body sockets both exist survive normalization; either
/// socket may still be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfBranch {
    pub condition: Option<Node>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Entry point; never emits an action.
    Start,

    // Movement / robot actions.
    MoveForward {
        steps: Option<Box<Node>>,
    },
    Rotate {
        direction: RotateDirection,
    },
    TurnBack,
    Collect {
        color: CollectColor,
        count: Option<Box<Node>>,
    },
    TakeBox,
    PutBox,

    // Control flow.
    Repeat {
        times: Option<Box<Node>>,
        body: Vec<Node>,
    },
    RepeatRange {
        variable: Option<Box<Node>>,
        from: Option<Box<Node>>,
        to: Option<Box<Node>>,
        step: Option<Box<Node>>,
        body: Vec<Node>,
    },
    While {
        condition: Option<Box<Node>>,
        body: Vec<Node>,
    },
    If {
        condition: Option<Box<Node>>,
        then_body: Vec<Node>,
        /// None when the else socket does not exist on the block.
        else_body: Option<Vec<Node>>,
    },
    IfExpandable {
        condition: Option<Box<Node>>,
        then_body: Vec<Node>,
        /// Branch count as stored by the editor on the live block.
        branch_count: u32,
        /// May be shorter than `branch_count` when socket pairs are missing.
        branches: Vec<ElseIfBranch>,
        else_body: Option<Vec<Node>>,
    },

    // Functions.
    FunctionDef {
        name: Option<String>,
        body: Vec<Node>,
    },
    FunctionCall {
        name: Option<String>,
    },

    // Expression operands.
    Number {
        value: i64,
    },
    Variable {
        name: String,
    },
    Arithmetic {
        op: ArithOp,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },

    // Condition operands.
    Boolean {
        value: bool,
    },
    /// Generic comparison with two expression sockets.
    LogicCompare {
        op: ComparisonOp,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
    /// Comparison whose right side is a literal field, not a socket.
    Comparison {
        op: ComparisonOp,
        left: Option<Box<Node>>,
        value: i64,
    },
    LogicOperation {
        op: LogicOp,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
    /// Pure wrapper delegating to its single condition socket.
    ConditionWrapper {
        inner: Option<Box<Node>>,
    },
    BooleanEquals {
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
    ColorPredicate {
        color: PredicateColor,
    },
    Counter {
        kind: CounterKind,
    },

    /// Anything the compiler does not recognize; converts to nothing.
    Unknown {
        block_type: String,
    },
}
