use std::collections::HashSet;
use std::error::Error;

use dagview::graph::{DepGraph, ancestors_of};

type TestResult = Result<(), Box<dyn Error>>;

fn node_ids(subgraph: &dagview::graph::Subgraph) -> HashSet<String> {
    subgraph.nodes.iter().map(|n| n.id.clone()).collect()
}

fn edge_pairs(subgraph: &dagview::graph::Subgraph) -> HashSet<(String, String)> {
    subgraph
        .edges
        .iter()
        .map(|e| (e.from.clone(), e.to.clone()))
        .collect()
}

#[test]
fn chain_rooted_at_the_tail_returns_the_whole_chain() -> TestResult {
    let mut graph = DepGraph::new();
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("B"), "C");

    let subgraph = ancestors_of(&graph, "C");

    assert_eq!(
        node_ids(&subgraph),
        HashSet::from(["A".into(), "B".into(), "C".into()])
    );
    assert_eq!(
        edge_pairs(&subgraph),
        HashSet::from([("A".into(), "B".into()), ("B".into(), "C".into())])
    );
    // The start node leads the list.
    assert_eq!(subgraph.nodes[0].id, "C");

    Ok(())
}

#[test]
fn diamond_ancestors_are_included_exactly_once() {
    let mut graph = DepGraph::new();
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("A"), "C");
    graph.upsert_edge(Some("B"), "D");
    graph.upsert_edge(Some("C"), "D");

    let subgraph = ancestors_of(&graph, "D");

    assert_eq!(subgraph.nodes.len(), 4);
    assert_eq!(
        node_ids(&subgraph),
        HashSet::from(["A".into(), "B".into(), "C".into(), "D".into()])
    );
    assert_eq!(subgraph.edges.len(), 4);
}

#[test]
fn unrelated_branches_are_excluded() {
    let mut graph = DepGraph::new();
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("X"), "Y");

    let subgraph = ancestors_of(&graph, "B");

    assert_eq!(
        node_ids(&subgraph),
        HashSet::from(["A".into(), "B".into()])
    );
    assert_eq!(
        edge_pairs(&subgraph),
        HashSet::from([("A".into(), "B".into())])
    );
}

#[test]
fn descendants_are_not_ancestors() {
    let mut graph = DepGraph::new();
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("B"), "C");

    let subgraph = ancestors_of(&graph, "B");

    assert_eq!(
        node_ids(&subgraph),
        HashSet::from(["A".into(), "B".into()])
    );
}

#[test]
fn unknown_start_node_yields_an_empty_result() {
    let graph = DepGraph::new();

    let subgraph = ancestors_of(&graph, "missing");

    assert!(subgraph.is_empty());
    assert!(subgraph.edges.is_empty());
}

#[test]
fn node_with_no_dependencies_is_a_singleton_subgraph() {
    let mut graph = DepGraph::new();
    graph.upsert_node("A", []);

    let subgraph = ancestors_of(&graph, "A");

    assert_eq!(subgraph.nodes.len(), 1);
    assert!(subgraph.edges.is_empty());
}
