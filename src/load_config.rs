use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::VerifierConfig;

/// Load selection/assembly overrides from a YAML file, or fall back to the
/// built-in defaults when no path is given.
///
/// Every field is optional; an override file only needs the knobs it wants
/// to change.
pub fn load_config(path: Option<&Path>) -> Result<VerifierConfig> {
    let Some(path) = path else {
        info!("No config file given, using default selection criteria");
        return Ok(VerifierConfig::default());
    };

    info!(config_path = ?path, "Loading configuration from file");
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: VerifierConfig =
        serde_yaml::from_str(&content).context("failed to parse config YAML")?;
    config.trace_loaded();
    Ok(config)
}
