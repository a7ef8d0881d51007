//! WASM entry points for browser use: the block editor compiles and
//! validates programs in-page before handing them to the game engine or
//! to submission storage.

use wasm_bindgen::prelude::*;

use crate::validate::ValidationReport;

/// Compile a workspace JSON into the full program document.
/// Returns `{status: "success", program}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn compile_workspace(json: &str) -> JsValue {
    let result = compile_inner(json, false);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Compile a workspace JSON into the reduced `{actions, functions}` form
/// used for submission persistence.
#[wasm_bindgen]
pub fn compile_workspace_reduced(json: &str) -> JsValue {
    let result = compile_inner(json, true);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_inner(json: &str, reduced: bool) -> CompileResult {
    let workspace = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(e) => {
            return CompileResult::Errors {
                errors: vec![e.to_string()],
            };
        }
    };

    let program = if reduced {
        crate::compile::compile_reduced(&workspace).map(|p| serde_json::to_value(&p))
    } else {
        crate::compile::compile(&workspace).map(|p| serde_json::to_value(&p))
    };

    match program {
        Ok(Ok(value)) => CompileResult::Success { program: value },
        Ok(Err(e)) => CompileResult::Errors {
            errors: vec![format!("failed to serialize program: {}", e)],
        },
        Err(e) => CompileResult::Errors {
            errors: vec![e.to_string()],
        },
    }
}

/// Validate a serialized program document. Always returns a
/// `{isValid, errors}` report; a document that cannot be parsed at all
/// reports as invalid rather than throwing.
#[wasm_bindgen]
pub fn validate_program(json: &str) -> JsValue {
    let report = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(value) => crate::validate::validate_value(&value),
        Err(e) => ValidationReport {
            is_valid: false,
            errors: vec![format!("failed to parse program JSON: {}", e)],
        },
    };
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

/// Compile a workspace and validate the result in one call.
#[wasm_bindgen]
pub fn compile_and_validate(json: &str) -> JsValue {
    let report = match crate::compile::compile_json(json) {
        Ok(program) => crate::validate::validate(&program),
        Err(e) => ValidationReport {
            is_valid: false,
            errors: vec![e.to_string()],
        },
    };
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { program: serde_json::Value },
    #[serde(rename = "errors")]
    Errors { errors: Vec<String> },
}
