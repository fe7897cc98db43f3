//! Errors for announcement catalog acquisition.
//!
//! Targeting itself is total; only the catalog providers can fail. A
//! provider failure leaves the store's last-known-good catalog in place.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnouncementError {
    /// Reading the catalog source failed.
    #[error("Failed to read announcement catalog from {path:?}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: farebell_core::error::CoreError,
    },

    /// The catalog document could not be parsed.
    #[error("Failed to parse announcement catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),
}
