//! The notification registry: ordered storage and lifecycle mutations.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::notifications::events::NotificationEvent;
use crate::notifications::types::Notification;

const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;

/// Ordered collection of notifications, newest first, with read/unread
/// lifecycle operations.
///
/// Every mutation is idempotent and total: operations on unknown ids are
/// silent no-ops, since UI actions may race harmlessly against prior
/// deletions.
#[async_trait]
pub trait NotificationRegistry: Send + Sync {
    /// Inserts at the front (newest first).
    async fn append(&self, notification: Notification);

    /// Appends a dispatch batch in order; each element is inserted at the
    /// front in turn, so the batch's last element ends up frontmost.
    async fn extend(&self, batch: Vec<Notification>);

    /// Sets the read flag. No-op if the id is absent or already read.
    async fn mark_read(&self, id: Uuid);

    /// Sets the read flag on every entry.
    async fn mark_all_read(&self);

    /// Removes the entry if present.
    async fn delete(&self, id: Uuid);

    /// Removes every entry.
    async fn clear(&self);

    /// Count of unread entries, recomputed on demand.
    async fn unread_count(&self) -> usize;

    /// Current ordered view, newest first.
    async fn all(&self) -> Vec<Notification>;

    /// Subscribes to registry mutation events.
    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent>;
}

/// In-memory registry with an optional size cap.
///
/// When the cap is reached, appending evicts the oldest entry, mirroring
/// a bounded notification history.
pub struct InMemoryNotificationRegistry {
    entries: RwLock<VecDeque<Notification>>,
    max_items: Option<usize>,
    event_publisher: broadcast::Sender<NotificationEvent>,
}

impl InMemoryNotificationRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CHANNEL_CAPACITY, None)
    }

    /// Registry with at most `max_items` entries. A cap of zero retains
    /// nothing: appended notifications are dropped immediately.
    pub fn with_max_items(max_items: usize) -> Self {
        Self::with_capacity(DEFAULT_EVENT_CHANNEL_CAPACITY, Some(max_items))
    }

    pub fn with_capacity(event_capacity: usize, max_items: Option<usize>) -> Self {
        let (event_publisher, _) = broadcast::channel(event_capacity);
        Self {
            entries: RwLock::new(VecDeque::new()),
            max_items,
            event_publisher,
        }
    }

    fn publish_event(&self, event: NotificationEvent) {
        if self.event_publisher.send(event).is_err() {
            debug!("No subscribers for notification event");
        }
    }
}

impl Default for InMemoryNotificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationRegistry for InMemoryNotificationRegistry {
    async fn append(&self, notification: Notification) {
        if self.max_items == Some(0) {
            debug!(id = %notification.id, "Registry capacity is zero, dropping notification");
            return;
        }
        let mut entries = self.entries.write().await;
        if let Some(max) = self.max_items {
            while entries.len() >= max {
                if let Some(evicted) = entries.pop_back() {
                    debug!(id = %evicted.id, "Evicting oldest notification at capacity");
                    self.publish_event(NotificationEvent::Deleted {
                        notification_id: evicted.id,
                    });
                }
            }
        }
        entries.push_front(notification.clone());
        drop(entries);
        info!(id = %notification.id, title = %notification.title, "Notification posted");
        self.publish_event(NotificationEvent::Posted { notification });
    }

    async fn extend(&self, batch: Vec<Notification>) {
        for notification in batch {
            self.append(notification).await;
        }
    }

    async fn mark_read(&self, id: Uuid) {
        let became_read = {
            let mut entries = self.entries.write().await;
            match entries.iter_mut().find(|n| n.id == id) {
                Some(n) if !n.is_read => {
                    n.mark_as_read();
                    true
                }
                Some(_) => false,
                None => {
                    debug!(%id, "mark_read on unknown notification id, ignoring");
                    false
                }
            }
        };
        if became_read {
            self.publish_event(NotificationEvent::Read {
                notification_id: id,
            });
        }
    }

    async fn mark_all_read(&self) {
        let mut entries = self.entries.write().await;
        let mut newly_read = 0;
        for n in entries.iter_mut() {
            if !n.is_read {
                n.mark_as_read();
                newly_read += 1;
            }
        }
        drop(entries);
        if newly_read > 0 {
            self.publish_event(NotificationEvent::AllRead { newly_read });
        }
    }

    async fn delete(&self, id: Uuid) {
        let removed = {
            let mut entries = self.entries.write().await;
            let index = entries.iter().position(|n| n.id == id);
            match index {
                Some(index) => {
                    entries.remove(index);
                    true
                }
                None => {
                    debug!(%id, "delete on unknown notification id, ignoring");
                    false
                }
            }
        };
        if removed {
            self.publish_event(NotificationEvent::Deleted {
                notification_id: id,
            });
        }
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
        self.publish_event(NotificationEvent::Cleared);
    }

    async fn unread_count(&self) -> usize {
        self.entries.read().await.iter().filter(|n| !n.is_read).count()
    }

    async fn all(&self) -> Vec<Notification> {
        self.entries.read().await.iter().cloned().collect()
    }

    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.event_publisher.subscribe()
    }
}
