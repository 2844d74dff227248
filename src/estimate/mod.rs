// src/estimate/mod.rs

//! Finish-time estimation over the dependency graph.
//!
//! A node's finish time is taken as recorded when the node already finished
//! successfully, derived from its own start time while it is running, and
//! otherwise derived recursively from the finish times of its predecessors.
//! Derived fields are written back into the store and flagged under the
//! [`ESTIMATED_ATTR`] attribute so the presentation layer can surface which
//! values are estimates.

pub mod clock;

use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::FieldsSection;
use crate::graph::{DepGraph, GraphError};
use crate::ingest::AttrValue;

pub use clock::{add_minutes, epoch_floor};

/// Attribute recording which scheduling fields were derived, as a
/// comma-joined list of field names.
pub const ESTIMATED_ATTR: &str = "estimated";

/// Estimate the finish time of `id`, storing derived fields in the graph.
///
/// Returns `Ok(None)` when no estimate can be produced:
/// - the node is unknown or lacks any of the four scheduling attributes,
/// - a recorded value needed for the estimate has the wrong type,
/// - a direct predecessor is an undated boundary node.
///
/// Dependency data is contractually acyclic; a cycle encountered during the
/// recursive walk is reported as [`GraphError::CycleDetected`] rather than
/// overflowing the stack.
pub fn estimate_finish(
    graph: &mut DepGraph,
    id: &str,
    fields: &FieldsSection,
    boundary: &[String],
) -> Result<Option<NaiveDateTime>, GraphError> {
    let mut path = HashSet::new();
    estimate_inner(graph, id, fields, boundary, &mut path)
}

fn estimate_inner(
    graph: &mut DepGraph,
    id: &str,
    fields: &FieldsSection,
    boundary: &[String],
    path: &mut HashSet<String>,
) -> Result<Option<NaiveDateTime>, GraphError> {
    if !path.insert(id.to_string()) {
        return Err(GraphError::CycleDetected(id.to_string()));
    }
    let result = estimate_node(graph, id, fields, boundary, path);
    path.remove(id);
    result
}

fn estimate_node(
    graph: &mut DepGraph,
    id: &str,
    fields: &FieldsSection,
    boundary: &[String],
    path: &mut HashSet<String>,
) -> Result<Option<NaiveDateTime>, GraphError> {
    let Some(node) = graph.get(id) else {
        return Ok(None);
    };

    let required = [
        fields.avg_duration.as_str(),
        fields.start_time.as_str(),
        fields.finish_time.as_str(),
        fields.status.as_str(),
    ];
    if !node.has_attributes(&required) {
        debug!(node = id, "missing scheduling attributes; no estimate");
        return Ok(None);
    }

    let status = node
        .attribute(&fields.status)
        .and_then(AttrValue::as_number);
    let duration = node
        .attribute(&fields.avg_duration)
        .and_then(AttrValue::as_number);

    // Finished successfully: the recorded finish time is authoritative.
    if status == Some(1.0) {
        return Ok(node
            .attribute(&fields.finish_time)
            .and_then(AttrValue::as_timestamp));
    }

    // Actively running: finish = recorded start + average duration.
    if status == Some(0.0) {
        let start = node
            .attribute(&fields.start_time)
            .and_then(AttrValue::as_timestamp);
        let (Some(start), Some(minutes)) = (start, duration) else {
            debug!(node = id, "running node lacks usable start/duration; no estimate");
            return Ok(None);
        };

        let finish = add_minutes(start, minutes);
        store_estimate(graph, id, fields, None, finish, &[&fields.finish_time]);
        return Ok(Some(finish));
    }

    // No decisive status: derive start from predecessor finish times.
    let predecessors: Vec<String> = graph.dependencies_of(id).to_vec();

    if predecessors.iter().any(|p| boundary.iter().any(|b| b == p)) {
        debug!(node = id, "predecessor is an undated boundary node; no estimate");
        return Ok(None);
    }

    let Some(minutes) = duration else {
        debug!(node = id, "waiting node lacks a usable duration; no estimate");
        return Ok(None);
    };

    let mut start = epoch_floor();
    for pred in &predecessors {
        if let Some(finish) = estimate_inner(graph, pred, fields, boundary, path)? {
            if finish > start {
                start = finish;
            }
        }
    }

    let finish = add_minutes(start, minutes);
    store_estimate(
        graph,
        id,
        fields,
        Some(start),
        finish,
        &[&fields.start_time, &fields.finish_time],
    );
    Ok(Some(finish))
}

/// Write derived fields back into the store and flag them as estimated.
fn store_estimate(
    graph: &mut DepGraph,
    id: &str,
    fields: &FieldsSection,
    start: Option<NaiveDateTime>,
    finish: NaiveDateTime,
    derived: &[&str],
) {
    let Some(node) = graph.get_mut(id) else {
        return;
    };

    if let Some(start) = start {
        node.attributes
            .insert(fields.start_time.clone(), AttrValue::Timestamp(start));
    }
    node.attributes
        .insert(fields.finish_time.clone(), AttrValue::Timestamp(finish));
    node.attributes.insert(
        ESTIMATED_ATTR.to_string(),
        AttrValue::Text(derived.join(",")),
    );
}
