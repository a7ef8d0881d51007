//! Parse phase: workspace JSON → Rust types + link graph construction.

pub mod graph;
pub mod types;

pub use graph::LinkGraph;
pub use types::*;

use crate::error::CompileError;

/// Deserialize a workspace JSON string into a `Workspace` struct.
pub fn parse(json: &str) -> Result<Workspace, CompileError> {
    serde_json::from_str::<Workspace>(json)
        .map_err(|e| CompileError::Parse(format!("failed to parse workspace JSON: {}", e)))
}

/// Parse JSON and build the link graph in one step.
pub fn parse_and_build(json: &str) -> Result<(Workspace, LinkGraph), CompileError> {
    let workspace = parse(json)?;
    let graph = LinkGraph::build(&workspace);
    Ok((workspace, graph))
}
