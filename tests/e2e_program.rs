//! End-to-end: workspace JSON in, program document out.

mod helpers;

use block_compiler::compile::{compile, compile_json, compile_reduced};
use block_compiler::error::CompileError;
use block_compiler::parse;
use helpers::*;
use serde_json::json;

#[test]
fn patrol_workspace_compiles_to_expected_document() {
    let json = include_str!("fixtures/robot_patrol.json");
    let program = compile_json(json).expect("Should compile");
    let value = serde_json::to_value(&program).expect("Should serialize");
    assert_eq!(
        value,
        json!({
            "version": "1.0.0",
            "programName": "patrol",
            "actions": [
                {
                    "type": "repeat",
                    "count": 4,
                    "body": [
                        {"type": "forward", "count": 2},
                        {"type": "turnLeft"}
                    ]
                },
                {"type": "collect", "count": 3, "color": "green"},
                {
                    "type": "while",
                    "cond": {
                        "type": "condition",
                        "functionName": "checkWarehouse",
                        "operator": ">",
                        "value": 0,
                        "check": true
                    },
                    "body": [{"type": "takeBox", "count": 1}]
                },
                {"type": "callFunction", "functionName": "unload"}
            ],
            "functions": [
                {
                    "name": "unload",
                    "body": [{"type": "putBox", "count": 1}]
                }
            ]
        })
    );
}

#[test]
fn program_document_round_trips() {
    let json = include_str!("fixtures/robot_patrol.json");
    let program = compile_json(json).expect("Should compile");
    let serialized = serde_json::to_string(&program).expect("Should serialize");
    let restored: block_compiler::program::Program =
        serde_json::from_str(&serialized).expect("Should deserialize");
    assert_eq!(program, restored);
}

#[test]
fn empty_workspace_compiles_to_defaults() {
    let program = compile_json(r#"{"blocks": []}"#).expect("Should compile");
    insta::assert_json_snapshot!(program, @r###"
    {
      "version": "1.0.0",
      "programName": "user_program",
      "actions": [],
      "functions": []
    }
    "###);
}

#[test]
fn workspace_metadata_overrides_defaults() {
    let mut ws = program_workspace(vec![]);
    ws.name = Some("maze_run".into());
    ws.version = Some("2.1.0".into());
    let program = compile(&ws).expect("Should compile");
    assert_eq!(program.program_name, "maze_run");
    assert_eq!(program.version, "2.1.0");
}

#[test]
fn reduced_form_has_no_metadata() {
    let json = include_str!("fixtures/robot_patrol.json");
    let ws = parse::parse(json).expect("Should parse");
    let full = compile(&ws).expect("Should compile");
    let reduced = compile_reduced(&ws).expect("Should compile");

    assert_eq!(reduced.actions, full.actions);
    assert_eq!(reduced.functions, full.functions);
    let value = serde_json::to_value(&reduced).expect("Should serialize");
    assert!(value.get("version").is_none());
    assert!(value.get("programName").is_none());
    assert!(value.get("actions").is_some());
}

#[test]
fn compile_json_rejects_malformed_input() {
    let result = compile_json("{\"blocks\": 7}");
    assert!(matches!(result, Err(CompileError::Parse(_))));
}
