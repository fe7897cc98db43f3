//! The announcement catalog store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::announcements::targeting::eligible_for;
use crate::announcements::types::Announcement;
use crate::shared_types::UserContext;

/// Holds the session's announcement catalog.
///
/// The catalog is replaced wholesale on load; entries are never mutated
/// or deleted individually.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Replaces the current catalog atomically. Readers never observe a
    /// partially-updated catalog.
    async fn load(&self, catalog: Vec<Announcement>);

    /// Returns the full catalog in load order.
    async fn all(&self) -> Vec<Announcement>;

    /// Returns the announcements eligible for `ctx`, in load order.
    async fn eligible_for(&self, ctx: &UserContext) -> Vec<Announcement>;
}

/// In-memory store backed by an `Arc` swap under a `RwLock`.
pub struct InMemoryAnnouncementStore {
    catalog: RwLock<Arc<Vec<Announcement>>>,
}

impl InMemoryAnnouncementStore {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn with_catalog(catalog: Vec<Announcement>) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
        }
    }
}

impl Default for InMemoryAnnouncementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnnouncementStore for InMemoryAnnouncementStore {
    async fn load(&self, catalog: Vec<Announcement>) {
        let next = Arc::new(catalog);
        let mut guard = self.catalog.write().await;
        debug!(
            previous = guard.len(),
            next = next.len(),
            "Replacing announcement catalog"
        );
        *guard = next;
    }

    async fn all(&self) -> Vec<Announcement> {
        self.catalog.read().await.as_ref().clone()
    }

    async fn eligible_for(&self, ctx: &UserContext) -> Vec<Announcement> {
        let catalog = Arc::clone(&*self.catalog.read().await);
        eligible_for(&catalog, ctx)
    }
}
