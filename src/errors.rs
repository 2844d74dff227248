// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Most of the crate uses `anyhow` for wiring and I/O; the structured graph
//! errors live in [`crate::graph::GraphError`].

pub use anyhow::{Error, Result};
