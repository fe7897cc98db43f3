//! Logging setup for the Farebell core layer.
//!
//! Built on the `tracing` ecosystem: console output, plus an optional
//! daily-rolling file layer in text or JSON format, driven by
//! [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

// Holds the worker guard for the non-blocking file writer. Dropping the
// guard would stop file logging, so it lives for the process lifetime.
static FILE_LOG_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early startup before configuration is loaded, or as
/// a fallback when full initialization fails. Filters on `RUST_LOG`,
/// defaulting to "info". Errors (e.g., a global subscriber already set)
/// are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Initializes logging from the given configuration.
///
/// Installs a console layer and, when `config.file_path` is set, a
/// daily-rolling file layer in the configured format. The file writer's
/// [`WorkerGuard`] is retained internally for the process lifetime.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();
    layers.push(
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .boxed(),
    );

    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer);
        *FILE_LOG_GUARD
            .lock()
            .map_err(|e| CoreError::Internal(format!("log guard mutex poisoned: {}", e)))? =
            Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::SetGlobalDefault(e.to_string()))?;
    Ok(())
}

/// Creates the rolling file layer and its writer guard.
///
/// Ensures the parent directory exists and configures the log format
/// ("text" or "json", no ANSI colors in files).
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            utils::fs::ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("farebell.log")),
    );
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((layer.boxed(), guard))
        }
        "text" => {
            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((layer.boxed(), guard))
        }
        other => Err(LoggingError::InvalidFormat(other.to_string()).into()),
    }
}

fn parse_level(spec: &str) -> Result<Level, LoggingError> {
    match spec.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}
