//! Core infrastructure layer for the Farebell notification engine.
//!
//! This crate carries the concerns shared by every Farebell component:
//! error types, logging initialization, configuration loading, and a few
//! filesystem helpers. It contains no domain logic; the announcement and
//! notification machinery lives in `farebell-domain`.

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError};
