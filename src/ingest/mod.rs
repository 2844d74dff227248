// src/ingest/mod.rs

//! Row ingestion: CSV tables in, a dependency graph out.
//!
//! - [`table`] reads the raw CSV into headers + string rows.
//! - [`value`] coerces raw cells into typed [`AttrValue`]s.
//! - [`build_graph`] folds the rows into a [`DepGraph`].

pub mod table;
pub mod value;

use tracing::{debug, warn};

use crate::graph::DepGraph;

pub use table::{DataTable, Header, read_table, read_table_from_reader};
pub use value::{AttrValue, NO_DATA, parse_compact_datetime};

/// Build the dependency graph from a data table.
///
/// Per row: upsert the node with its coerced attributes (later rows win on
/// re-occurrence), then record the dependency edge. An empty dependency cell
/// records no edge; an unseen dependency identifier creates a bare stub
/// node.
pub fn build_graph(table: &DataTable) -> DepGraph {
    let mut graph = DepGraph::new();

    for (row_index, row) in table.rows.iter().enumerate() {
        let node_id = row.first().map(|s| s.trim()).unwrap_or("");
        if node_id.is_empty() {
            warn!(row = row_index + 1, "row has no node identifier; skipping");
            continue;
        }

        let attributes = table
            .headers
            .iter()
            .enumerate()
            .skip(2)
            .map(|(index, header)| {
                let raw = row.get(index).map(String::as_str).unwrap_or("");
                (
                    header.name.clone(),
                    AttrValue::parse(header.column_type, raw),
                )
            });

        graph.upsert_node(node_id, attributes);

        let dependency = row.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());
        graph.upsert_edge(dependency, node_id);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built from data table"
    );

    graph
}
