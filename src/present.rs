// src/present.rs

//! Presentation mapping: status codes to display states and colors,
//! timestamps to the display timezone, and per-node tooltip text.
//!
//! Pure functions over subgraph snapshots; nothing here touches the store.

use chrono::{FixedOffset, TimeZone};
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::FieldsSection;
use crate::estimate::ESTIMATED_ATTR;
use crate::graph::{ProcessNode, Subgraph};
use crate::ingest::AttrValue;

/// Display state derived from the numeric status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    /// No status recorded (absent or the empty-cell sentinel).
    Waiting,
    /// Status `0`: actively running.
    Running,
    /// Status `-1`: finished with an error.
    Error,
    /// Any other status value.
    Success,
}

impl DisplayStatus {
    /// Map a raw status attribute to its display state.
    pub fn from_attr(value: Option<&AttrValue>) -> Self {
        let Some(value) = value else {
            return DisplayStatus::Waiting;
        };
        if value.is_no_data() {
            return DisplayStatus::Waiting;
        }
        match value.as_number() {
            Some(n) if n == 0.0 => DisplayStatus::Running,
            Some(n) if n == -1.0 => DisplayStatus::Error,
            _ => DisplayStatus::Success,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Waiting => "WAITING",
            DisplayStatus::Running => "RUNNING",
            DisplayStatus::Error => "ERROR",
            DisplayStatus::Success => "SUCCESS",
        }
    }

    fn style(&self) -> StatusStyle {
        match self {
            DisplayStatus::Running => StatusStyle {
                color: "rgba(70, 150, 50, 0.8)",
                font_color: "white",
            },
            DisplayStatus::Error => StatusStyle {
                color: "rgba(255, 0, 0, 0.8)",
                font_color: "white",
            },
            DisplayStatus::Waiting => StatusStyle {
                color: "rgba(0, 0, 0, 0.8)",
                font_color: "white",
            },
            DisplayStatus::Success => StatusStyle {
                color: "rgba(0, 150, 255, 0.8)",
                font_color: "grey",
            },
        }
    }
}

struct StatusStyle {
    color: &'static str,
    font_color: &'static str,
}

/// Node label font, as understood by the rendering widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontStyle {
    pub color: String,
    pub size: u32,
    pub face: String,
}

impl FontStyle {
    fn for_status(status: DisplayStatus) -> Self {
        Self {
            color: status.style().font_color.to_string(),
            size: 20,
            face: "monospace".to_string(),
        }
    }
}

/// A node as handed to the rendering widget: identifier, label, display
/// styling, tooltip, and the stringified attributes flattened alongside.
#[derive(Debug, Clone, Serialize)]
pub struct VizNode {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub attributes: IndexMap<String, String>,
}

/// Decorate every node of a subgraph for display.
pub fn decorate(subgraph: &Subgraph, fields: &FieldsSection, offset: FixedOffset) -> Vec<VizNode> {
    subgraph
        .nodes
        .iter()
        .map(|node| decorate_node(node, fields, offset))
        .collect()
}

fn decorate_node(node: &ProcessNode, fields: &FieldsSection, offset: FixedOffset) -> VizNode {
    let mut attributes: IndexMap<String, String> = node
        .attributes
        .iter()
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect();

    let mut color = None;
    let mut font = None;

    if let Some(raw_status) = node.attribute(&fields.status) {
        let status = DisplayStatus::from_attr(Some(raw_status));
        attributes.insert(fields.status.clone(), status.label().to_string());
        color = Some(status.style().color.to_string());
        font = Some(FontStyle::for_status(status));
    }

    let mut title = None;
    if node.has_attributes(&[fields.start_time.as_str(), fields.finish_time.as_str()]) {
        for name in [&fields.start_time, &fields.finish_time] {
            if let Some(formatted) = node
                .attribute(name)
                .and_then(AttrValue::as_timestamp)
                .map(|ts| format_in_offset(ts, offset))
            {
                attributes.insert(name.clone(), formatted);
            }
        }
        title = Some(tooltip(node, fields, &attributes));
    }

    VizNode {
        id: node.id.clone(),
        label: node.id.clone(),
        color,
        font,
        title,
        attributes,
    }
}

/// Format a stored timestamp in the fixed display offset.
///
/// Stored timestamps are wall-clock UTC; only the rendering is shifted.
fn format_in_offset(ts: chrono::NaiveDateTime, offset: FixedOffset) -> String {
    offset
        .from_utc_datetime(&ts)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn tooltip(
    node: &ProcessNode,
    fields: &FieldsSection,
    attributes: &IndexMap<String, String>,
) -> String {
    let display = |name: &str| attributes.get(name).cloned().unwrap_or_default();

    let mut lines = Vec::new();
    if let Some(estimated) = node.attribute(ESTIMATED_ATTR) {
        lines.push(format!("Estimated [{estimated}]"));
    }
    for name in [
        &fields.start_time,
        &fields.finish_time,
        &fields.avg_duration,
        &fields.status,
    ] {
        lines.push(format!("{} = {}", name, display(name)));
    }
    lines.join("\n")
}
