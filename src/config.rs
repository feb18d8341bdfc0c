//! Configuration file support for depgraph-view.
//!
//! Provides YAML-based configuration through `depgraph-view.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! options always win over values from the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::graph_building::domain::View;
use crate::graph_building::policies::NodeSizing;
use crate::shared::error::GraphError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depgraph-view.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub min_count: Option<i64>,
    pub view: Option<ViewSetting>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub sizing: Option<String>,
    pub max_node_size: Option<f64>,
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub cache: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub layout: Option<LayoutConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// View given either as its id (`3`) or by name (`gentoo`, `draw_gentoo`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ViewSetting {
    Id(i64),
    Name(String),
}

impl ViewSetting {
    pub fn resolve(&self) -> std::result::Result<View, GraphError> {
        match self {
            ViewSetting::Id(id) => View::from_id(*id),
            ViewSetting::Name(name) => View::from_str(name),
        }
    }
}

/// Force layout overrides.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct LayoutConfig {
    pub repulsion: Option<f64>,
    pub edge_length: Option<f64>,
    pub gravity: Option<f64>,
    pub friction: Option<f64>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n\
             💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n\
             💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref view) = config.view {
        if let Err(e) = view.resolve() {
            bail!("Invalid config: {}", e);
        }
    }
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Set 'format' to json or html.",
                e
            );
        }
    }
    if let Some(ref sizing) = config.sizing {
        if let Err(e) = NodeSizing::from_str(sizing) {
            bail!("Invalid config: {}", e);
        }
    }
    if let Some(max_node_size) = config.max_node_size {
        if !max_node_size.is_finite() || max_node_size <= 0.0 {
            bail!(
                "Invalid config: max_node_size must be positive, got {}.",
                max_node_size
            );
        }
    }
    for (name, value) in [("width", config.width), ("height", config.height)] {
        if value == Some(0) {
            bail!("Invalid config: {} must be greater than 0.", name);
        }
    }
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to wait for the server indefinitely."
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
