//! Configuration management for the Farebell core layer.
//!
//! Submodules:
//! - [`types`]: the configuration schema ([`CoreConfig`], [`LoggingConfig`]).
//! - [`defaults`]: default values used when a file is missing or incomplete.
//! - [`loader`]: TOML loading and validation via [`ConfigLoader`].

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig};
