// src/graph/subgraph.rs

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::graph::store::{DepGraph, ProcessNode};

/// A directed edge between two included nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEdge {
    pub from: String,
    pub to: String,
}

/// Value snapshot of a start node plus all its transitive predecessors and
/// the edges among them. Holds clones, not live references into the store.
#[derive(Debug, Clone, Default)]
pub struct Subgraph {
    pub nodes: Vec<ProcessNode>,
    pub edges: Vec<SubEdge>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Extract the ancestor subgraph of `start`.
///
/// The result contains `start` first, then every node reachable by walking
/// dependency edges backwards, each exactly once, plus every edge whose
/// endpoints are both included. An unknown start node yields an empty result.
pub fn ancestors_of(graph: &DepGraph, start: &str) -> Subgraph {
    let Some(start_node) = graph.get(start) else {
        warn!(node = start, "start node not found in graph; empty subgraph");
        return Subgraph::default();
    };

    let mut included: HashSet<&str> = HashSet::new();
    included.insert(start);

    let mut nodes = vec![start_node.clone()];
    let mut stack: Vec<&str> = graph
        .dependencies_of(start)
        .iter()
        .map(String::as_str)
        .collect();

    while let Some(id) = stack.pop() {
        if !included.insert(id) {
            continue;
        }
        if let Some(node) = graph.get(id) {
            nodes.push(node.clone());
        }
        stack.extend(graph.dependencies_of(id).iter().map(String::as_str));
    }

    let edges: Vec<SubEdge> = graph
        .edges()
        .filter(|(from, to)| included.contains(from) && included.contains(to))
        .map(|(from, to)| SubEdge {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect();

    debug!(
        start,
        nodes = nodes.len(),
        edges = edges.len(),
        "extracted ancestor subgraph"
    );

    Subgraph { nodes, edges }
}
