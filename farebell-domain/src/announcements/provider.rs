//! Catalog acquisition providers.
//!
//! The store is agnostic to where announcements come from; a provider
//! hands it an already-resolved catalog. The static provider stands in
//! for a remote catalog service, and the TOML provider reads an
//! operator-maintained file.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::announcements::errors::AnnouncementError;
use crate::announcements::types::Announcement;

/// Source of announcement catalogs.
#[async_trait]
pub trait AnnouncementProvider: Send + Sync {
    async fn load_catalog(&self) -> Result<Vec<Announcement>, AnnouncementError>;
}

/// Provider over a fixed in-memory catalog.
pub struct StaticAnnouncementProvider {
    catalog: Vec<Announcement>,
}

impl StaticAnnouncementProvider {
    pub fn new(catalog: Vec<Announcement>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl AnnouncementProvider for StaticAnnouncementProvider {
    async fn load_catalog(&self) -> Result<Vec<Announcement>, AnnouncementError> {
        Ok(self.catalog.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    announcements: Vec<Announcement>,
}

/// Provider reading a TOML catalog file with an `[[announcements]]` array.
///
/// Timestamps are RFC 3339 strings (e.g. `expires_at = "2026-09-01T00:00:00Z"`).
pub struct TomlCatalogProvider {
    path: PathBuf,
}

impl TomlCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(content: &str) -> Result<Vec<Announcement>, AnnouncementError> {
        let document: CatalogDocument = toml::from_str(content)?;
        Ok(document.announcements)
    }
}

#[async_trait]
impl AnnouncementProvider for TomlCatalogProvider {
    async fn load_catalog(&self) -> Result<Vec<Announcement>, AnnouncementError> {
        let content = farebell_core::utils::fs::read_to_string(Path::new(&self.path)).map_err(
            |source| AnnouncementError::CatalogRead {
                path: self.path.clone(),
                source,
            },
        )?;
        let catalog = Self::parse(&content)?;
        debug!(count = catalog.len(), path = ?self.path, "Loaded announcement catalog");
        Ok(catalog)
    }
}
