// src/graph/store.rs

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use thiserror::Error;

use crate::ingest::AttrValue;

/// Structured graph errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The dependency graph contains a cycle. Dependency data is contractually
    /// acyclic; this fails fast instead of recursing forever.
    #[error("cycle detected in dependency graph involving node '{0}'")]
    CycleDetected(String),
}

/// A process node: identifier plus attribute bag.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessNode {
    pub id: String,
    /// Attribute name -> typed value, in stable name order.
    pub attributes: IndexMap<String, AttrValue>,
}

impl ProcessNode {
    fn bare(id: &str) -> Self {
        Self {
            id: id.to_string(),
            attributes: IndexMap::new(),
        }
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Whether every named attribute is present (sentinel values count).
    pub fn has_attributes(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.attributes.contains_key(*name))
    }
}

/// In-memory dependency graph keyed by node identifier.
///
/// Edges run dependency -> dependent ("source is a dependency of target").
/// The store is append/update-only during ingestion; nothing here deletes
/// nodes. Other components read it or receive cloned snapshots.
#[derive(Debug, Clone, Default)]
pub struct DepGraph {
    /// Nodes in first-seen order.
    nodes: IndexMap<String, ProcessNode>,
    /// Edges in first-seen order; re-inserting the same pair is a no-op.
    edges: IndexSet<(String, String)>,
    /// Direct predecessors (dependencies) per node, deduplicated.
    incoming: HashMap<String, Vec<String>>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the node if absent; otherwise merge the attributes into the
    /// existing record (later values win).
    pub fn upsert_node<I>(&mut self, id: &str, attributes: I)
    where
        I: IntoIterator<Item = (String, AttrValue)>,
    {
        let node = self
            .nodes
            .entry(id.to_string())
            .or_insert_with(|| ProcessNode::bare(id));
        for (name, value) in attributes {
            node.attributes.insert(name, value);
        }
    }

    /// Record a dependency edge `from -> to`.
    ///
    /// A `None` source is a no-op (the row had no dependency). An unseen
    /// source identifier is auto-created as a bare stub. Recording the same
    /// edge twice is idempotent.
    pub fn upsert_edge(&mut self, from: Option<&str>, to: &str) {
        let Some(from) = from else {
            return;
        };

        if !self.nodes.contains_key(from) {
            self.nodes.insert(from.to_string(), ProcessNode::bare(from));
        }
        if !self.nodes.contains_key(to) {
            self.nodes.insert(to.to_string(), ProcessNode::bare(to));
        }

        if self.edges.insert((from.to_string(), to.to_string())) {
            self.incoming
                .entry(to.to_string())
                .or_default()
                .push(from.to_string());
        }
    }

    /// Look up a node by identifier.
    pub fn get(&self, id: &str) -> Option<&ProcessNode> {
        self.nodes.get(id)
    }

    /// Mutable access, used by the date estimator to store derived fields.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut ProcessNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Direct dependencies of a node (sources of its incoming edges).
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node identifiers in first-seen order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// All nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &ProcessNode> {
        self.nodes.values()
    }

    /// All edges `(from, to)` in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check that the graph is acyclic.
    ///
    /// A topological sort will fail if there is a cycle.
    pub fn validate_acyclic(&self) -> Result<(), GraphError> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for id in self.nodes.keys() {
            graph.add_node(id.as_str());
        }
        for (from, to) in &self.edges {
            graph.add_edge(from.as_str(), to.as_str(), ());
        }

        match toposort(&graph, None) {
            Ok(_order) => Ok(()),
            Err(cycle) => Err(GraphError::CycleDetected(cycle.node_id().to_string())),
        }
    }
}
