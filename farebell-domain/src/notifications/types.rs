//! Notification records and their construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::announcements::types::Announcement;
use crate::shared_types::MessageKind;

/// Input for a standalone notification not backed by an announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationInput {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub kind: MessageKind,
}

/// A per-user, per-occurrence instantiation of an announcement, or a
/// standalone message.
///
/// Display fields are copied from the source announcement at creation
/// time; later catalog edits do not retroactively alter existing
/// notifications. `created_at` is the sole display-ordering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: MessageKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    /// Back-reference to the originating announcement; relation only,
    /// absent for standalone notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_id: Option<Uuid>,
}

impl Notification {
    /// Creates a standalone notification. Always starts unread.
    pub fn new(input: NotificationInput, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            message: input.message,
            kind: input.kind,
            is_read: false,
            created_at: now,
            announcement_id: None,
        }
    }

    /// Instantiates an announcement into a notification with a fresh id.
    pub fn from_announcement(announcement: &Announcement, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: announcement.title.clone(),
            message: announcement.message.clone(),
            kind: announcement.kind,
            is_read: false,
            created_at: now,
            announcement_id: Some(announcement.id),
        }
    }

    pub fn mark_as_read(&mut self) {
        self.is_read = true;
    }
}
