// src/config/mod.rs

//! Configuration loading, modelling and validation.
//!
//! - [`model`] contains the serde structs mirroring the TOML file.
//! - [`loader`] reads and validates a config file from disk.
//! - [`validate`] holds the semantic checks.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ColumnType, ConfigFile, ConfigSection, FieldsSection, LayoutSection};
pub use validate::{display_offset, validate_config};
