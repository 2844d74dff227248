// src/filter/index.rs

use indexmap::{IndexMap, IndexSet};

use crate::graph::DepGraph;

/// Collect the filterable attributes of a graph.
///
/// An attribute qualifies when the number of distinct values it takes across
/// all nodes carrying it is between 1 and `max_allowed`. The `NO_DATA`
/// sentinel is an ordinary value here: a node with an empty cell is
/// filterable on that emptiness.
///
/// The outer map keeps attribute first-seen order; each value list keeps
/// value first-seen order. Values are stringified, matching how the filter
/// engine compares them. Returns an empty map when the graph has no
/// attributes at all.
pub fn filter_candidates(graph: &DepGraph, max_allowed: usize) -> IndexMap<String, Vec<String>> {
    let mut distinct: IndexMap<String, IndexSet<String>> = IndexMap::new();

    for node in graph.nodes() {
        for (name, value) in &node.attributes {
            distinct
                .entry(name.clone())
                .or_default()
                .insert(value.to_string());
        }
    }

    distinct
        .into_iter()
        .filter(|(_, values)| !values.is_empty() && values.len() <= max_allowed)
        .map(|(name, values)| (name, values.into_iter().collect()))
        .collect()
}
