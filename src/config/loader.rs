//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `lostchain.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    data_dir = %config.storage.data_dir,
    activity_cap = config.activity.max_entries,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();
  if !path.exists() {
    let config = AppConfig::default();
    validate_config(&config)?;
    return Ok(config);
  }
  load_config(path)
}

/// Parse and validate TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.log_level.trim().is_empty(),
    "log_level must not be empty"
  );

  anyhow::ensure!(
    !config.storage.data_dir.trim().is_empty(),
    "storage.data_dir must not be empty"
  );

  anyhow::ensure!(
    config.activity.max_entries > 0,
    "activity.max_entries must be positive, got {}",
    config.activity.max_entries
  );

  let format = &config.activity.timestamp_format;
  anyhow::ensure!(
    !format.is_empty(),
    "activity.timestamp_format must not be empty"
  );
  anyhow::ensure!(
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error)),
    "activity.timestamp_format is not a valid chrono format: {format:?}"
  );

  Ok(())
}
