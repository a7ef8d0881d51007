//! Compile phase: normalized graph → Program.
//!
//! The main chain is the one headed by the start block; the start block
//! itself never emits an action. The function table is collected over the
//! entire workspace independently of the main chain.

pub mod condition;
pub mod dispatch;
pub mod expr;
pub mod functions;

pub use condition::parse_condition;
pub use dispatch::{convert_chain, convert_node};
pub use expr::{parse_expr, parse_expr_or};
pub use functions::build_functions;

use crate::error::CompileError;
use crate::normalize::{normalize, Node, NormalizedGraph};
use crate::parse::types::Workspace;
use crate::program::{Action, CompiledProgram, Program};

pub const PROGRAM_VERSION: &str = "1.0.0";
pub const DEFAULT_PROGRAM_NAME: &str = "user_program";

/// Compile a workspace into the full program document.
pub fn compile(workspace: &Workspace) -> Result<Program, CompileError> {
    let graph = normalize(workspace)?;
    Ok(Program {
        version: workspace
            .version
            .clone()
            .unwrap_or_else(|| PROGRAM_VERSION.into()),
        program_name: workspace
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.into()),
        actions: main_actions(&graph),
        functions: build_functions(&graph),
    })
}

/// Compile into the reduced form used for submission persistence.
pub fn compile_reduced(workspace: &Workspace) -> Result<CompiledProgram, CompileError> {
    let graph = normalize(workspace)?;
    Ok(CompiledProgram {
        actions: main_actions(&graph),
        functions: build_functions(&graph),
    })
}

/// Parse and compile in one step.
pub fn compile_json(json: &str) -> Result<Program, CompileError> {
    let workspace = crate::parse::parse(json)?;
    compile(&workspace)
}

/// Actions of the chain headed by the start block. A workspace without a
/// reachable start chain compiles to an empty action list.
fn main_actions(graph: &NormalizedGraph) -> Vec<Action> {
    graph
        .chains
        .iter()
        .find(|chain| matches!(chain.first(), Some(Node::Start)))
        .map(|chain| convert_chain(chain))
        .unwrap_or_default()
}
