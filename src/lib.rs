// src/lib.rs

pub mod cli;
pub mod config;
pub mod estimate;
pub mod filter;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod present;
pub mod render;

pub mod errors;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::RegexBuilder;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::validate::display_offset;
use crate::estimate::estimate_finish;
use crate::filter::{apply_filters, filter_candidates};
use crate::graph::{DepGraph, ancestors_of};
use crate::render::{VizEdge, build_payload, write_payload};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - CSV ingestion and graph construction
/// - attribute filtering / node search
/// - date estimation + ancestor extraction + presentation
/// - render payload output
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;
    let offset = display_offset(&cfg)?;

    let table = ingest::read_table(&args.data, &cfg.columns)?;
    let mut graph = ingest::build_graph(&table);
    graph
        .validate_acyclic()
        .context("input dependency data must be acyclic")?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "dependency graph ready"
    );

    if args.list_attributes {
        print_filter_candidates(&graph, cfg.config.max_filter_values);
        return Ok(());
    }

    if args.list_nodes {
        for id in surviving_nodes(&graph, &args)? {
            println!("{id}");
        }
        return Ok(());
    }

    let Some(node) = args.node.as_deref() else {
        println!("no node selected; pass --node NAME (see --list-nodes)");
        return Ok(());
    };

    match estimate_finish(&mut graph, node, &cfg.fields, &cfg.config.boundary_nodes)? {
        Some(finish) => debug!(node, %finish, "estimated finish time"),
        None => debug!(node, "no finish-time estimate available"),
    }

    let subgraph = ancestors_of(&graph, node);
    if subgraph.is_empty() {
        info!(node, "nothing to render for the requested node");
    }

    let nodes = present::decorate(&subgraph, &cfg.fields, offset);
    let edges: Vec<VizEdge> = subgraph.edges.iter().map(VizEdge::from).collect();

    let payload = build_payload(nodes, edges, &cfg.layout);
    write_payload(&payload, args.out.as_deref().map(Path::new))
}

/// Node identifiers surviving `--filter` constraints and `--search`.
///
/// Only the listing surface evaluates this; the render path takes `--node`
/// directly and never touches the filter or search arguments.
pub fn surviving_nodes(graph: &DepGraph, args: &CliArgs) -> Result<Vec<String>> {
    let selection = cli::parse_filter_args(&args.filters)?;

    let mut surviving = if selection.is_empty() {
        graph.node_ids().map(str::to_string).collect()
    } else {
        apply_filters(graph, &selection)
    };

    if let Some(pattern) = &args.search {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid --search pattern '{}'", pattern))?;
        surviving.retain(|id| regex.is_match(id));
    }

    Ok(surviving)
}

/// Print the filterable attributes with their value lists.
fn print_filter_candidates(graph: &DepGraph, max_allowed: usize) {
    let candidates = filter_candidates(graph, max_allowed);
    if candidates.is_empty() {
        println!("no filterable attributes");
        return;
    }
    for (attribute, values) in &candidates {
        println!("{}: {}", attribute, values.join(", "));
    }
}
