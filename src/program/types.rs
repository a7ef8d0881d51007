//! Typed action/expression/condition tree emitted by the compiler.
//!
//! Everything here is symbolic: expressions and conditions are never
//! evaluated by this crate, only shaped for the downstream interpreter.
//! The serde attributes pin the wire format: a numeric expression
//! serializes as a bare number, a variable token as the literal string
//! `"{{name}}"`, and an arithmetic node as `{"type":"arithmetic",...}`.

use serde::{Deserialize, Serialize};

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// Symbolic arithmetic value. Always producible: malformed or missing
/// input folds to `Number(0)`, never to an absent expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expr {
    Number(i64),
    /// Template token of the form `"{{name}}"`, bound at execution time.
    Variable(String),
    Arithmetic(Box<BinaryExpr>),
}

/// Arithmetic node, serialized as `{"type":"arithmetic","op":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BinaryExpr {
    Arithmetic { op: ArithOp, left: Expr, right: Expr },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Expr {
    pub fn number(n: i64) -> Self {
        Expr::Number(n)
    }

    /// Render a variable name as a `"{{name}}"` template token.
    pub fn variable(name: &str) -> Self {
        Expr::Variable(format!("{{{{{}}}}}", name))
    }

    pub fn arithmetic(op: ArithOp, left: Expr, right: Expr) -> Self {
        Expr::Arithmetic(Box::new(BinaryExpr::Arithmetic { op, left, right }))
    }
}

// =============================================================================
// CONDITIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
}

/// Symbolic boolean tree. Unlike `Expr`, a condition may be absent;
/// `If`/`While` store that absence as-is instead of defaulting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Condition {
    #[serde(rename = "boolean")]
    Boolean { value: bool },

    #[serde(rename = "variableComparison")]
    VariableComparison {
        variable: Expr,
        operator: ComparisonOp,
        value: Expr,
    },

    /// Named boolean check against the interpreter, either a bare sensor
    /// predicate (`isGreen()`) or a threshold check on a named counter
    /// (`checkWarehouse() >= 2`).
    #[serde(rename = "condition", rename_all = "camelCase")]
    Predicate {
        function_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        operator: Option<ComparisonOp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Expr>,
        check: bool,
    },

    #[serde(rename = "and")]
    And { conditions: Vec<Condition> },

    #[serde(rename = "or")]
    Or { conditions: Vec<Condition> },
}

impl Condition {
    /// Bare named predicate with no comparison attached.
    pub fn predicate(function_name: &str, check: bool) -> Self {
        Condition::Predicate {
            function_name: function_name.into(),
            operator: None,
            value: None,
            check,
        }
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectColor {
    Red,
    Green,
    Yellow,
}

/// One instruction or control-flow node in the compiled output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "forward")]
    Forward { count: Expr },

    #[serde(rename = "turnLeft")]
    TurnLeft,

    #[serde(rename = "turnRight")]
    TurnRight,

    #[serde(rename = "turnBack")]
    TurnBack,

    #[serde(rename = "collect")]
    Collect { count: Expr, color: CollectColor },

    /// These block kinds have no count input; the count is always 1.
    #[serde(rename = "takeBox")]
    TakeBox { count: u32 },

    #[serde(rename = "putBox")]
    PutBox { count: u32 },

    #[serde(rename = "repeat")]
    Repeat { count: Expr, body: Vec<Action> },

    #[serde(rename = "repeatRange")]
    RepeatRange {
        variable: String,
        from: Expr,
        to: Expr,
        step: Expr,
        body: Vec<Action>,
    },

    #[serde(rename = "while")]
    While {
        cond: Option<Condition>,
        body: Vec<Action>,
    },

    #[serde(rename = "if")]
    If {
        cond: Option<Condition>,
        then: Vec<Action>,
        #[serde(rename = "elseIf", skip_serializing_if = "Option::is_none")]
        else_if: Option<Vec<ElseIfClause>>,
        #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
        else_branch: Option<Vec<Action>>,
    },

    #[serde(rename = "callFunction")]
    CallFunction {
        #[serde(rename = "functionName")]
        function_name: String,
    },
}

/// One conditional branch beyond the primary `if` condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseIfClause {
    pub cond: Option<Condition>,
    pub then: Vec<Action>,
}

// =============================================================================
// FUNCTIONS & PROGRAM
// =============================================================================

/// A named body collected from the workspace, independent of the main chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub body: Vec<Action>,
}

/// Full program document for the execution engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub version: String,
    pub program_name: String,
    pub actions: Vec<Action>,
    pub functions: Vec<FunctionDef>,
}

/// Reduced form used for submission persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledProgram {
    pub actions: Vec<Action>,
    pub functions: Vec<FunctionDef>,
}
