//! petgraph-based directed graph over the workspace's block links.
//!
//! Edges follow `next` links and filled value/statement sockets. The graph
//! is used for two things before normalization: finding the top-level
//! chain heads (blocks with no incoming link) and rejecting cyclic link
//! structures, which the id-referenced export format can express even
//! though the live editor cannot.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::Workspace;
use crate::error::CompileError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    Next,
    Value(String),
    Statement(String),
}

pub struct LinkGraph {
    pub graph: DiGraph<String, LinkKind>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl LinkGraph {
    /// Build the link graph. Links to unknown block ids are dropped here
    /// and the corresponding sockets read as empty downstream.
    pub fn build(workspace: &Workspace) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for block in &workspace.blocks {
            let idx = graph.add_node(block.id.clone());
            node_indices.insert(block.id.clone(), idx);
        }

        for block in &workspace.blocks {
            let from = node_indices[&block.id];
            if let Some(next) = &block.next {
                if let Some(&to) = node_indices.get(next) {
                    graph.add_edge(from, to, LinkKind::Next);
                }
            }
            for (socket, target) in &block.inputs {
                if let Some(&to) = target.as_ref().and_then(|id| node_indices.get(id)) {
                    graph.add_edge(from, to, LinkKind::Value(socket.clone()));
                }
            }
            for (socket, target) in &block.statements {
                if let Some(&to) = target.as_ref().and_then(|id| node_indices.get(id)) {
                    graph.add_edge(from, to, LinkKind::Statement(socket.clone()));
                }
            }
        }

        LinkGraph { graph, node_indices }
    }

    /// Top-level chain heads: blocks no other block links to, in
    /// workspace order.
    pub fn roots(&self) -> Vec<&str> {
        self.graph
            .externals(petgraph::Direction::Incoming)
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Reject cyclic link structures before the recursive normalizer runs.
    pub fn check_acyclic(&self) -> Result<(), CompileError> {
        match toposort(&self.graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => Err(CompileError::CyclicGraph(
                self.graph[cycle.node_id()].clone(),
            )),
        }
    }

    pub fn incoming_count(&self, block_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(block_id) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .count()
    }
}
