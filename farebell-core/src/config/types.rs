//! Configuration struct definitions for the Farebell core layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;
use crate::error::ConfigError;

/// Configuration for the logging subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level_spec")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path_spec")]
    pub file_path: Option<PathBuf>,
    /// The format for log messages written to a file.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format_spec")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level_spec(),
            file_path: defaults::default_log_file_path_spec(),
            format: defaults::default_log_format_spec(),
        }
    }
}

impl LoggingConfig {
    /// Validates and normalizes the configuration in place.
    ///
    /// Lowercases `level` and `format` and rejects values outside the
    /// documented sets.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.level = self.level.to_lowercase();
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown log level '{}'",
                    other
                )))
            }
        }
        self.format = self.format.to_lowercase();
        match self.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown log format '{}'",
                    other
                )))
            }
        }
        Ok(())
    }
}

/// Root configuration structure for the Farebell core layer.
///
/// Aggregates all core configuration settings. Designed to be deserialized
/// from a TOML file, with defaults for missing sections or fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Logging subsystem configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Validates and normalizes every section.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}
