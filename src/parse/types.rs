//! Serde target for the block editor's exported workspace JSON.
//!
//! The editor owns and mutates the live block graph; this crate consumes
//! its serialized export. Blocks are stored as a flat list and reference
//! each other by id: `next` links the next block in the same chain,
//! `inputs` are value sockets and `statements` are statement sockets.
//! A socket key present with a `null` value means the socket exists but
//! is empty; an absent key means the socket does not exist on the block
//! at all. Expandable conditionals rely on that distinction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    /// Optional program name; the assembler supplies a default if unset.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional program format version; defaulted by the assembler.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub blocks: Vec<WorkspaceBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    /// Primitive field values keyed by field name.
    #[serde(default)]
    pub fields: HashMap<String, Value>,
    /// Value sockets: socket name → attached block id (None = empty socket).
    #[serde(default)]
    pub inputs: HashMap<String, Option<String>>,
    /// Statement sockets: socket name → head block id of the child chain.
    #[serde(default)]
    pub statements: HashMap<String, Option<String>>,
    /// Next block in this block's own chain.
    #[serde(default)]
    pub next: Option<String>,
    /// Ad hoc editor state, e.g. the branch count of an expandable if.
    #[serde(default, rename = "extraState")]
    pub extra_state: Option<ExtraState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraState {
    #[serde(default)]
    pub else_if_count: u32,
}

impl WorkspaceBlock {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// First candidate field that holds a non-empty string.
    pub fn first_populated_field(&self, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .filter_map(|name| self.field_str(name))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(String::from)
    }

    /// Attached block id of a value socket, if the socket is filled.
    pub fn input(&self, name: &str) -> Option<&str> {
        self.inputs.get(name).and_then(|v| v.as_deref())
    }

    /// Whether the value socket exists on this block (filled or not).
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }

    /// Head block id of a statement socket's chain, if attached.
    pub fn statement(&self, name: &str) -> Option<&str> {
        self.statements.get(name).and_then(|v| v.as_deref())
    }

    /// Whether the statement socket exists on this block (filled or not).
    pub fn has_statement(&self, name: &str) -> bool {
        self.statements.contains_key(name)
    }
}
