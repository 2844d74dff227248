// src/filter/engine.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::graph::DepGraph;

/// Selecting this value for an attribute leaves it unconstrained.
pub const IGNORE: &str = "IGNORE";

/// User filter selection: attribute name -> allowed stringified values.
///
/// An empty value list, or a list containing [`IGNORE`], places no
/// constraint on the attribute.
pub type FilterSelection = BTreeMap<String, Vec<String>>;

/// Evaluate a filter selection against every node in the graph.
///
/// A node passes iff, for every constrained attribute, its stringified
/// attribute value is among the allowed values. A node *missing* a
/// constrained attribute fails that constraint. Returns identifiers in
/// store order.
pub fn apply_filters(graph: &DepGraph, selection: &FilterSelection) -> Vec<String> {
    let surviving: Vec<String> = graph
        .nodes()
        .filter(|node| {
            selection.iter().all(|(attribute, allowed)| {
                if allowed.is_empty() || allowed.iter().any(|v| v == IGNORE) {
                    return true;
                }
                match node.attribute(attribute) {
                    Some(value) => {
                        let value = value.to_string();
                        allowed.iter().any(|v| *v == value)
                    }
                    None => false,
                }
            })
        })
        .map(|node| node.id.clone())
        .collect();

    debug!(
        total = graph.node_count(),
        surviving = surviving.len(),
        "applied attribute filters"
    );

    surviving
}
