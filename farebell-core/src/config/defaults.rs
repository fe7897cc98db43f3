//! Default values for configuration fields.
//!
//! These functions back the `#[serde(default = "...")]` attributes on the
//! configuration types and are reused by the `Default` implementations.

use std::path::PathBuf;

/// Default minimum log level.
pub fn default_log_level_spec() -> String {
    "info".to_string()
}

/// Default log file path. `None` disables file logging.
pub fn default_log_file_path_spec() -> Option<PathBuf> {
    None
}

/// Default log output format for file logging.
pub fn default_log_format_spec() -> String {
    "text".to_string()
}
