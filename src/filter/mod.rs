// src/filter/mod.rs

//! Attribute indexing and node filtering.
//!
//! - [`index`] scans the graph for attributes with a bounded number of
//!   distinct values (the filter candidates offered to the user).
//! - [`engine`] evaluates a user selection against every node.

pub mod engine;
pub mod index;

pub use engine::{FilterSelection, IGNORE, apply_filters};
pub use index::filter_candidates;
