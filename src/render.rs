// src/render.rs

//! Render payload for the external graph-rendering widget.
//!
//! The widget (vis-network style) accepts a node list, an edge list and an
//! options object; it owns layout and drawing. This module only assembles
//! and serializes that payload. Option field names follow the widget's
//! camelCase contract.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::config::LayoutSection;
use crate::graph::SubEdge;
use crate::present::VizNode;

/// A directed edge as the widget expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VizEdge {
    pub from: String,
    pub to: String,
}

impl From<&SubEdge> for VizEdge {
    fn from(edge: &SubEdge) -> Self {
        Self {
            from: edge.from.clone(),
            to: edge.to.clone(),
        }
    }
}

/// The complete hand-off to the rendering widget.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
    pub options: RenderOptions,
}

/// Widget options: hierarchical top-down layout with directed sorting,
/// arrow-headed edges, physics disabled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub width: String,
    pub height: String,
    pub auto_resize: bool,
    pub nodes: NodeOptions,
    pub edges: EdgeOptions,
    pub interaction: InteractionOptions,
    pub layout: LayoutOptions,
    pub physics: PhysicsOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOptions {
    pub border_width_selected: u32,
    pub shape: String,
    pub font: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOptions {
    pub color: EdgeColor,
    pub smooth: SmoothOptions,
    pub arrows: ArrowOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeColor {
    pub inherit: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothOptions {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub curve_type: String,
    pub force_direction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrowOptions {
    pub to: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOptions {
    pub hover: bool,
    pub hover_connected_edges: bool,
    pub multiselect: bool,
    pub tooltip_delay: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub hierarchical: HierarchicalOptions,
    pub improved_layout: bool,
    pub random_seed: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalOptions {
    pub enabled: bool,
    pub block_shifting: bool,
    pub edge_minimization: bool,
    pub parent_centralization: bool,
    pub sort_method: String,
    pub level_separation: u32,
    pub tree_spacing: u32,
    pub node_spacing: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsOptions {
    pub enabled: bool,
    pub hierarchical_repulsion: RepulsionOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepulsionOptions {
    pub avoid_overlap: u32,
}

/// Assemble the payload for a decorated subgraph.
///
/// Node spacing scales with the longest node label so box-shaped nodes do
/// not overlap; an empty node list falls back to the configured default.
pub fn build_payload(
    nodes: Vec<VizNode>,
    edges: Vec<VizEdge>,
    layout: &LayoutSection,
) -> RenderPayload {
    let node_spacing = nodes
        .iter()
        .map(|node| node.label.chars().count() as u32)
        .max()
        .map(|longest| longest * layout.node_spacing_per_char)
        .unwrap_or(layout.default_node_spacing);

    let options = RenderOptions {
        width: "100%".to_string(),
        height: "100%".to_string(),
        auto_resize: true,
        nodes: NodeOptions {
            border_width_selected: 2,
            shape: "box".to_string(),
            font: "20px monospace white".to_string(),
            color: "rgba(0, 0, 0, 0.8)".to_string(),
        },
        edges: EdgeOptions {
            color: EdgeColor { inherit: true },
            smooth: SmoothOptions {
                enabled: true,
                curve_type: "cubicBezier".to_string(),
                force_direction: "vertical".to_string(),
            },
            arrows: ArrowOptions { to: true },
        },
        interaction: InteractionOptions {
            hover: true,
            hover_connected_edges: false,
            multiselect: false,
            tooltip_delay: 0,
        },
        layout: LayoutOptions {
            hierarchical: HierarchicalOptions {
                enabled: true,
                block_shifting: true,
                edge_minimization: true,
                parent_centralization: true,
                sort_method: "directed".to_string(),
                level_separation: layout.level_separation,
                tree_spacing: layout.tree_spacing,
                node_spacing,
            },
            improved_layout: true,
            random_seed: 0,
        },
        physics: PhysicsOptions {
            enabled: false,
            hierarchical_repulsion: RepulsionOptions { avoid_overlap: 1 },
        },
    };

    RenderPayload {
        nodes,
        edges,
        options,
    }
}

/// Serialize the payload as pretty JSON to a file, or to stdout when no
/// output path is given.
pub fn write_payload(payload: &RenderPayload, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(payload).context("serializing render payload")?;

    match out {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("writing render payload to {:?}", path))?;
            debug!(?path, bytes = json.len(), "render payload written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
