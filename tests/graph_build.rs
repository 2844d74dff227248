use std::error::Error;

use dagview::graph::{DepGraph, GraphError};
use dagview::ingest::AttrValue;

type TestResult = Result<(), Box<dyn Error>>;

fn attrs(pairs: &[(&str, AttrValue)]) -> Vec<(String, AttrValue)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn upserting_same_node_twice_is_idempotent() -> TestResult {
    let mut graph = DepGraph::new();

    graph.upsert_node("A", attrs(&[("owner", AttrValue::Text("ops".into()))]));
    graph.upsert_node("A", attrs(&[("owner", AttrValue::Text("ops".into()))]));

    assert_eq!(graph.node_count(), 1);
    let node = graph.get("A").ok_or("node A missing")?;
    assert_eq!(node.attribute("owner"), Some(&AttrValue::Text("ops".into())));

    Ok(())
}

#[test]
fn later_rows_overwrite_attributes_and_keep_the_rest() -> TestResult {
    let mut graph = DepGraph::new();

    graph.upsert_node(
        "A",
        attrs(&[
            ("estado", AttrValue::Number(0.0)),
            ("owner", AttrValue::Text("ops".into())),
        ]),
    );
    graph.upsert_node("A", attrs(&[("estado", AttrValue::Number(1.0))]));

    let node = graph.get("A").ok_or("node A missing")?;
    assert_eq!(node.attribute("estado"), Some(&AttrValue::Number(1.0)));
    assert_eq!(node.attribute("owner"), Some(&AttrValue::Text("ops".into())));

    Ok(())
}

#[test]
fn empty_dependency_records_no_edge() {
    let mut graph = DepGraph::new();

    graph.upsert_node("A", []);
    graph.upsert_edge(None, "A");

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.dependencies_of("A").is_empty());
}

#[test]
fn unseen_dependency_becomes_a_bare_stub() -> TestResult {
    let mut graph = DepGraph::new();

    graph.upsert_node("B", attrs(&[("estado", AttrValue::Number(1.0))]));
    graph.upsert_edge(Some("A"), "B");

    let stub = graph.get("A").ok_or("stub A missing")?;
    assert!(stub.attributes.is_empty());
    assert_eq!(graph.dependencies_of("B"), ["A".to_string()]);

    Ok(())
}

#[test]
fn duplicate_edges_are_recorded_once() {
    let mut graph = DepGraph::new();

    graph.upsert_node("B", []);
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("A"), "B");

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dependencies_of("B").len(), 1);
}

#[test]
fn acyclic_chain_passes_validation() -> TestResult {
    let mut graph = DepGraph::new();
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("B"), "C");

    graph.validate_acyclic()?;
    Ok(())
}

#[test]
fn cycle_is_reported() {
    let mut graph = DepGraph::new();
    graph.upsert_edge(Some("A"), "B");
    graph.upsert_edge(Some("B"), "A");

    let err = graph.validate_acyclic().unwrap_err();
    assert!(matches!(err, GraphError::CycleDetected(_)));
}
