// src/cli.rs

//! CLI argument parsing using `clap`.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::filter::FilterSelection;

/// Command-line arguments for `dagview`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagview",
    version,
    about = "Render dependency DAG subgraphs with status colors and estimated dates.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the input data table (CSV with a header row).
    ///
    /// Column 0 is the node identifier, column 1 the dependency identifier,
    /// the remaining columns are attributes.
    #[arg(long, value_name = "PATH")]
    pub data: String,

    /// Path to the config file (TOML).
    ///
    /// Default: `Dagview.toml` in the current working directory. A missing
    /// file at the default path falls back to built-in defaults.
    #[arg(long, value_name = "PATH", default_value = "Dagview.toml")]
    pub config: String,

    /// Node whose ancestor subgraph should be rendered.
    #[arg(long, value_name = "NAME")]
    pub node: Option<String>,

    /// Attribute filter, e.g. `--filter estado=1,0`. Repeatable.
    ///
    /// An empty value list or the value `IGNORE` leaves the attribute
    /// unconstrained.
    #[arg(long = "filter", value_name = "ATTR=V1,V2")]
    pub filters: Vec<String>,

    /// Case-insensitive regex applied to node identifiers when listing.
    #[arg(long, value_name = "PATTERN")]
    pub search: Option<String>,

    /// Print the node identifiers surviving `--filter` / `--search` and exit.
    #[arg(long)]
    pub list_nodes: bool,

    /// Print the filterable attributes and their value lists, then exit.
    #[arg(long)]
    pub list_attributes: bool,

    /// Write the render payload to this path instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGVIEW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Parse repeated `--filter ATTR=V1,V2` arguments into a [`FilterSelection`].
///
/// Repeating the same attribute extends its allowed-value set.
pub fn parse_filter_args(args: &[String]) -> Result<FilterSelection> {
    let mut selection = FilterSelection::new();

    for arg in args {
        let (attr, values) = arg
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid --filter '{}': expected ATTR=V1,V2", arg))?;

        if attr.is_empty() {
            return Err(anyhow!("invalid --filter '{}': empty attribute name", arg));
        }

        let entry = selection.entry(attr.to_string()).or_default();
        entry.extend(
            values
                .split(',')
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string()),
        );
    }

    Ok(selection)
}
