// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// Example:
///
/// ```toml
/// [config]
/// max_filter_values = 10
/// boundary_nodes = ["ROOT", "DAILY"]
/// display_timezone = "-03:00"
///
/// [columns]
/// fecha_inicio = "YEAR_MONTH_DAY_SECOND"
/// estado = "NUMBER"
///
/// [layout]
/// node_spacing_per_char = 15
/// ```
///
/// All sections are optional and fall back to built-in defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// Global behaviour config from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Names of the scheduling attributes from `[fields]`.
    #[serde(default)]
    pub fields: FieldsSection,

    /// Declared column types from `[columns]`.
    ///
    /// Keys are *header names*; headers not listed here are treated as text.
    #[serde(default)]
    pub columns: BTreeMap<String, ColumnType>,

    /// Hierarchical layout tuning from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,
}

/// Declared type of an attribute column, governing value coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ColumnType {
    /// Numeric value.
    #[serde(rename = "NUMBER")]
    Number,

    /// Compact `YYYYMMDDHHmmss` timestamp.
    #[serde(rename = "YEAR_MONTH_DAY_SECOND")]
    YearMonthDaySecond,

    /// Opaque text (the default for undeclared columns).
    #[serde(rename = "TEXT")]
    #[default]
    Text,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Maximum distinct-value cardinality for an attribute to become a
    /// filter candidate.
    #[serde(default = "default_max_filter_values")]
    pub max_filter_values: usize,

    /// Node identifiers that act as undated estimation boundaries: a node
    /// with one of these as a direct predecessor gets no date estimate.
    #[serde(default = "default_boundary_nodes")]
    pub boundary_nodes: Vec<String>,

    /// Fixed UTC offset (`±HH:MM`) used when formatting timestamps for
    /// display.
    #[serde(default = "default_display_timezone")]
    pub display_timezone: String,
}

fn default_max_filter_values() -> usize {
    10
}

fn default_boundary_nodes() -> Vec<String> {
    vec!["ROOT".to_string(), "DAILY".to_string()]
}

fn default_display_timezone() -> String {
    "-03:00".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            max_filter_values: default_max_filter_values(),
            boundary_nodes: default_boundary_nodes(),
            display_timezone: default_display_timezone(),
        }
    }
}

/// `[fields]` section: which attributes carry the scheduling data used by
/// the date estimator and the tooltip builder.
///
/// Defaults match the upstream data source's column names.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsSection {
    /// Average process duration, in minutes.
    #[serde(default = "default_avg_duration")]
    pub avg_duration: String,

    /// Process start timestamp.
    #[serde(default = "default_start_time")]
    pub start_time: String,

    /// Process finish timestamp.
    #[serde(default = "default_finish_time")]
    pub finish_time: String,

    /// Numeric status code (1 finished, 0 running, -1 error).
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_avg_duration() -> String {
    "duracion_promedio".to_string()
}

fn default_start_time() -> String {
    "fecha_inicio".to_string()
}

fn default_finish_time() -> String {
    "fecha_fin".to_string()
}

fn default_status() -> String {
    "estado".to_string()
}

impl Default for FieldsSection {
    fn default() -> Self {
        Self {
            avg_duration: default_avg_duration(),
            start_time: default_start_time(),
            finish_time: default_finish_time(),
            status: default_status(),
        }
    }
}

/// `[layout]` section: knobs for the hierarchical layout emitted in the
/// render payload options.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    /// Vertical distance between hierarchy levels.
    #[serde(default = "default_level_separation")]
    pub level_separation: u32,

    /// Distance between independent trees.
    #[serde(default = "default_tree_spacing")]
    pub tree_spacing: u32,

    /// Node spacing is the longest node label times this factor.
    #[serde(default = "default_node_spacing_per_char")]
    pub node_spacing_per_char: u32,

    /// Node spacing used when the subgraph has no nodes.
    #[serde(default = "default_node_spacing")]
    pub default_node_spacing: u32,
}

fn default_level_separation() -> u32 {
    150
}

fn default_tree_spacing() -> u32 {
    200
}

fn default_node_spacing_per_char() -> u32 {
    15
}

fn default_node_spacing() -> u32 {
    200
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            level_separation: default_level_separation(),
            tree_spacing: default_tree_spacing(),
            node_spacing_per_char: default_node_spacing_per_char(),
            default_node_spacing: default_node_spacing(),
        }
    }
}
