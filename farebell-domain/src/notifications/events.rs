//! Lifecycle events published by the notification registry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::notifications::types::Notification;

/// Broadcast to presentation-layer subscribers on registry mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationEvent {
    Posted {
        notification: Notification,
    },
    Read {
        notification_id: Uuid,
    },
    AllRead {
        newly_read: usize,
    },
    Deleted {
        notification_id: Uuid,
    },
    Cleared,
}
