// src/graph/mod.rs

//! Dependency graph storage and ancestor extraction.
//!
//! - [`store`] holds the in-memory graph keyed by node identifier.
//! - [`subgraph`] extracts the ancestor subgraph of a chosen node as a
//!   value snapshot.

pub mod store;
pub mod subgraph;

pub use store::{DepGraph, GraphError, ProcessNode};
pub use subgraph::{SubEdge, Subgraph, ancestors_of};
