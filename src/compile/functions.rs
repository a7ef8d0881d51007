//! Function-table builder.
//!
//! Scans every node in the workspace, detached chains included, since
//! function definitions usually live beside the main program rather than
//! on it, and compiles each definition's body through the dispatcher.
//! Duplicate names are not detected here; name resolution is the
//! interpreter's concern.

use crate::normalize::{Node, NormalizedGraph};
use crate::program::FunctionDef;

use super::dispatch::convert_chain;

pub fn build_functions(graph: &NormalizedGraph) -> Vec<FunctionDef> {
    let mut defs = Vec::new();
    for chain in &graph.chains {
        scan_chain(chain, &mut defs);
    }
    defs
}

fn scan_chain(chain: &[Node], defs: &mut Vec<FunctionDef>) {
    for node in chain {
        scan_node(node, defs);
    }
}

fn scan_node(node: &Node, defs: &mut Vec<FunctionDef>) {
    match node {
        Node::FunctionDef { name, body } => {
            let ordinal = defs.len() + 1;
            defs.push(FunctionDef {
                name: name
                    .clone()
                    .unwrap_or_else(|| format!("function_{}", ordinal)),
                body: convert_chain(body),
            });
            scan_chain(body, defs);
        }
        Node::Repeat { body, .. }
        | Node::RepeatRange { body, .. }
        | Node::While { body, .. } => scan_chain(body, defs),
        Node::If {
            then_body,
            else_body,
            ..
        } => {
            scan_chain(then_body, defs);
            if let Some(body) = else_body {
                scan_chain(body, defs);
            }
        }
        Node::IfExpandable {
            then_body,
            branches,
            else_body,
            ..
        } => {
            scan_chain(then_body, defs);
            for branch in branches {
                scan_chain(&branch.body, defs);
            }
            if let Some(body) = else_body {
                scan_chain(body, defs);
            }
        }
        _ => {}
    }
}
