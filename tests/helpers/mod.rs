#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::{json, Value};

use block_compiler::parse::types::{ExtraState, Workspace, WorkspaceBlock};

// =============================================================================
// Workspace block builders
// =============================================================================

/// Bare block with the given id and type, no fields or sockets.
pub fn block(id: &str, block_type: &str) -> WorkspaceBlock {
    WorkspaceBlock {
        id: id.into(),
        block_type: block_type.into(),
        fields: HashMap::new(),
        inputs: HashMap::new(),
        statements: HashMap::new(),
        next: None,
        extra_state: None,
    }
}

pub fn with_field(mut b: WorkspaceBlock, name: &str, value: Value) -> WorkspaceBlock {
    b.fields.insert(name.into(), value);
    b
}

/// Value socket attached to the given block id.
pub fn with_input(mut b: WorkspaceBlock, socket: &str, target: &str) -> WorkspaceBlock {
    b.inputs.insert(socket.into(), Some(target.into()));
    b
}

/// Value socket that exists on the block but has nothing attached.
pub fn with_empty_input(mut b: WorkspaceBlock, socket: &str) -> WorkspaceBlock {
    b.inputs.insert(socket.into(), None);
    b
}

/// Statement socket attached to the given head block id.
pub fn with_statement(mut b: WorkspaceBlock, socket: &str, head: &str) -> WorkspaceBlock {
    b.statements.insert(socket.into(), Some(head.into()));
    b
}

/// Statement socket that exists on the block but has nothing attached.
pub fn with_empty_statement(mut b: WorkspaceBlock, socket: &str) -> WorkspaceBlock {
    b.statements.insert(socket.into(), None);
    b
}

pub fn with_next(mut b: WorkspaceBlock, next: &str) -> WorkspaceBlock {
    b.next = Some(next.into());
    b
}

pub fn with_else_if_count(mut b: WorkspaceBlock, count: u32) -> WorkspaceBlock {
    b.extra_state = Some(ExtraState {
        else_if_count: count,
    });
    b
}

// =============================================================================
// Common operand blocks
// =============================================================================

pub fn number_block(id: &str, value: i64) -> WorkspaceBlock {
    with_field(block(id, "number"), "NUM", json!(value))
}

pub fn variable_block(id: &str, name: &str) -> WorkspaceBlock {
    with_field(block(id, "variable"), "VAR", json!(name))
}

pub fn boolean_block(id: &str, value: bool) -> WorkspaceBlock {
    let field = if value { "TRUE" } else { "FALSE" };
    with_field(block(id, "boolean"), "BOOL", json!(field))
}

// =============================================================================
// Workspace assembly
// =============================================================================

pub fn workspace(blocks: Vec<WorkspaceBlock>) -> Workspace {
    Workspace {
        name: None,
        version: None,
        blocks,
    }
}

/// Link the given blocks into a single chain via `next`, in order.
pub fn chain(mut blocks: Vec<WorkspaceBlock>) -> Vec<WorkspaceBlock> {
    let ids: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
    for i in 0..blocks.len().saturating_sub(1) {
        blocks[i].next = Some(ids[i + 1].clone());
    }
    blocks
}

/// Workspace whose main chain is a start block followed by the given
/// action blocks.
pub fn program_workspace(actions: Vec<WorkspaceBlock>) -> Workspace {
    program_workspace_with(actions, vec![])
}

/// Like `program_workspace`, plus detached blocks (operands referenced
/// from sockets, or standalone function definition chains).
pub fn program_workspace_with(
    actions: Vec<WorkspaceBlock>,
    detached: Vec<WorkspaceBlock>,
) -> Workspace {
    let mut main = vec![block("start-1", "start")];
    main.extend(actions);
    let mut blocks = chain(main);
    blocks.extend(detached);
    workspace(blocks)
}
