// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (threshold sanity, timezone syntax, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - a usable filter-candidate threshold,
///   - a parseable display timezone,
///   - sane layout spacing,
///   - distinct scheduling field names.
///
/// Every section has a working default, so a missing file at the *default*
/// path is not an error: it yields `ConfigFile::default()`. A missing file
/// at an explicitly given path still fails.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    if !path.exists() && path == default_config_path() {
        debug!(?path, "no config file at default path; using built-in defaults");
        let config = ConfigFile::default();
        validate_config(&config)?;
        return Ok(config);
    }

    let config = load_from_path(path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Helper to resolve the default config path.
///
/// Currently this just returns `Dagview.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagview.toml")
}
