// src/config/validate.rs

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use chrono::FixedOffset;

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `max_filter_values >= 1`
/// - `display_timezone` parses as a fixed `±HH:MM` offset
/// - `node_spacing_per_char >= 1`
/// - the four `[fields]` names are non-empty and pairwise distinct
///
/// It does **not** check that the `[columns]` / `[fields]` names actually
/// occur in the input table; absent attributes simply mean no estimation or
/// no status styling for the affected nodes.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_global_config(cfg)?;
    validate_layout(cfg)?;
    validate_fields(cfg)?;
    Ok(())
}

/// Parse the configured display timezone into a [`FixedOffset`].
pub fn display_offset(cfg: &ConfigFile) -> Result<FixedOffset> {
    FixedOffset::from_str(&cfg.config.display_timezone).map_err(|e| {
        anyhow!(
            "invalid [config].display_timezone '{}': {}",
            cfg.config.display_timezone,
            e
        )
    })
}

fn validate_global_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.config.max_filter_values == 0 {
        return Err(anyhow!("[config].max_filter_values must be >= 1 (got 0)"));
    }

    display_offset(cfg).context("invalid [config].display_timezone")?;

    Ok(())
}

fn validate_layout(cfg: &ConfigFile) -> Result<()> {
    if cfg.layout.node_spacing_per_char == 0 {
        return Err(anyhow!(
            "[layout].node_spacing_per_char must be >= 1 (got 0)"
        ));
    }
    Ok(())
}

fn validate_fields(cfg: &ConfigFile) -> Result<()> {
    let names = [
        ("avg_duration", &cfg.fields.avg_duration),
        ("start_time", &cfg.fields.start_time),
        ("finish_time", &cfg.fields.finish_time),
        ("status", &cfg.fields.status),
    ];

    for (key, name) in &names {
        if name.is_empty() {
            return Err(anyhow!("[fields].{} must not be empty", key));
        }
    }

    for (i, (key_a, name_a)) in names.iter().enumerate() {
        for (key_b, name_b) in names.iter().skip(i + 1) {
            if name_a == name_b {
                return Err(anyhow!(
                    "[fields].{} and [fields].{} both map to attribute '{}'",
                    key_a,
                    key_b,
                    name_a
                ));
            }
        }
    }

    Ok(())
}
