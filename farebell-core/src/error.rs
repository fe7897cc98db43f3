//! Error handling for the Farebell core layer.
//!
//! Defines the error types used throughout the infrastructure crate,
//! built with `thiserror`. The main error type is [`CoreError`], which
//! wraps the more specific [`ConfigError`] and [`LoggingError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the Farebell infrastructure layer.
///
/// Used as a common error type by infrastructure code, usually by wrapping
/// a more specific error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    Logging(#[from] LoggingError),

    /// Errors from filesystem operations not covered by a more specific
    /// configuration or logging variant.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file as TOML.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values were invalid after successful parsing.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// No configuration file was found at any of the expected locations.
    #[error("Configuration file not found. Searched locations: {locations:?}")]
    NotFound { locations: Vec<PathBuf> },
}

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured log level string was not recognized.
    #[error("Invalid log level specification: '{0}'")]
    InvalidLevel(String),

    /// The configured log format string was not recognized.
    #[error("Invalid log format specification: '{0}'")]
    InvalidFormat(String),

    /// Setting the global default subscriber failed.
    #[error("Failed to set global tracing subscriber: {0}")]
    SetGlobalDefault(String),
}
