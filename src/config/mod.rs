//! Configuration Module - TOML-based Store Configuration
//!
//! Loads and validates configuration from `lostchain.toml`. Every field
//! has a default, so an empty (or absent) file yields a working setup.

pub mod loader;

use serde::Deserialize;

use crate::domain::activity::DEFAULT_ACTIVITY_CAP;
use crate::usecases::data_store::{DEFAULT_ACTIVITY_TIMESTAMP_FORMAT, StoreOptions};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
  /// Logging setup.
  #[serde(default)]
  pub app: AppSection,
  /// Where data is persisted.
  #[serde(default)]
  pub storage: StorageConfig,
  /// Activity log behaviour.
  #[serde(default)]
  pub activity: ActivityConfig,
}

impl AppConfig {
  /// Store tunables derived from this config.
  pub fn store_options(&self) -> StoreOptions {
    StoreOptions {
      activity_cap: self.activity.max_entries,
      activity_timestamp_format: self.activity.timestamp_format.clone(),
    }
  }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Human-readable single-line output.
  #[default]
  Text,
  /// One JSON object per event.
  Json,
}

/// Process-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Log output format.
  #[serde(default)]
  pub log_format: LogFormat,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      log_format: LogFormat::default(),
    }
  }
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  /// Directory holding one JSON file per storage key.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
    }
  }
}

/// Activity log configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityConfig {
  /// Entries kept per user; older ones are dropped.
  #[serde(default = "default_max_entries")]
  pub max_entries: usize,
  /// chrono format string for the display timestamp (local time).
  #[serde(default = "default_timestamp_format")]
  pub timestamp_format: String,
}

impl Default for ActivityConfig {
  fn default() -> Self {
    Self {
      max_entries: default_max_entries(),
      timestamp_format: default_timestamp_format(),
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_data_dir() -> String {
  "data".to_string()
}

fn default_max_entries() -> usize {
  DEFAULT_ACTIVITY_CAP
}

fn default_timestamp_format() -> String {
  DEFAULT_ACTIVITY_TIMESTAMP_FORMAT.to_string()
}
