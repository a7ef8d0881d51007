//! Program validation: non-throwing, top-level findings.
//!
//! Validation runs over the serialized program document, the same shape
//! handed to the execution engine and to persistence, so it applies
//! equally to freshly compiled programs and to stored ones. Only the
//! top-level `actions` array is walked; loop and branch bodies are out
//! of scope, and saving behavior depends on exactly this coverage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::program::Program;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate(program: &Program) -> ValidationReport {
    let value = serde_json::to_value(program).unwrap_or(Value::Null);
    validate_value(&value)
}

pub fn validate_value(program: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    match program.get("actions").and_then(Value::as_array) {
        Some(actions) => {
            for (index, action) in actions.iter().enumerate() {
                validate_action(index, action, &mut errors);
            }
        }
        None => errors.push("Program actions must be an array".into()),
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn validate_action(index: usize, action: &Value, errors: &mut Vec<String>) {
    let action_type = action.get("type").and_then(Value::as_str).unwrap_or("");
    if action_type.is_empty() {
        errors.push(format!("Action {}: type is required", index));
        return;
    }

    match action_type {
        "forward" | "repeat" => require_numeric_count(index, action_type, action, errors),
        "collect" => validate_collect(index, action, errors),
        "repeatRange" => validate_repeat_range(index, action, errors),
        // A present-but-null `cond` on if/while is a valid program; the
        // interpreter decides how to treat it.
        _ => {}
    }
}

/// Numeric counts must be at least 1. Variable tokens and arithmetic
/// expressions are only resolvable at execution time and are exempt.
fn require_numeric_count(index: usize, action_type: &str, action: &Value, errors: &mut Vec<String>) {
    match action.get("count") {
        None | Some(Value::Null) => errors.push(format!(
            "Action {}: {} action requires count >= 1",
            index, action_type
        )),
        Some(Value::Number(n)) if n.as_f64().unwrap_or(0.0) < 1.0 => errors.push(format!(
            "Action {}: {} action requires count >= 1",
            index, action_type
        )),
        _ => {}
    }
}

/// Collect accepts a numeric count >= 1 or a non-empty token string;
/// expression objects pass through to the interpreter.
fn validate_collect(index: usize, action: &Value, errors: &mut Vec<String>) {
    let message = || format!("Action {}: collect action requires count >= 1", index);
    match action.get("count") {
        None | Some(Value::Null) => errors.push(message()),
        Some(Value::Number(n)) if n.as_f64().unwrap_or(0.0) < 1.0 => errors.push(message()),
        Some(Value::String(s)) if s.is_empty() => errors.push(message()),
        _ => {}
    }
}

fn validate_repeat_range(index: usize, action: &Value, errors: &mut Vec<String>) {
    let has_variable = action
        .get("variable")
        .and_then(Value::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    if !has_variable {
        errors.push(format!(
            "Action {}: repeatRange action requires a variable name",
            index
        ));
    }

    let populated = |field: &str| {
        action
            .get(field)
            .map(|v| !v.is_null())
            .unwrap_or(false)
    };
    if !populated("from") || !populated("to") {
        errors.push(format!(
            "Action {}: repeatRange action requires from and to bounds",
            index
        ));
    }
}
