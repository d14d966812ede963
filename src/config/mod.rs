//! Configuration module for ytsearch-rs
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Load settings from the first file found, or defaults, then apply
/// environment overrides and validate.
pub fn load() -> Result<Settings> {
    let mut settings = match find_settings_file() {
        Some(path) => {
            debug!("Loading settings from: {}", path.display());
            Settings::from_file(&path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?
        }
        None => {
            debug!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

/// Locate a settings file. `YTSEARCH_SETTINGS_PATH` wins over the
/// default locations.
fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("YTSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("ytsearch.yml"),
        PathBuf::from("config/ytsearch.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("ytsearch-rs/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
