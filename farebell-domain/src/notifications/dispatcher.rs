//! Trigger dispatch: materializing eligible announcements on domain events.

use chrono::{DateTime, Utc};

use crate::announcements::types::{Announcement, TriggerEvent};
use crate::notifications::types::Notification;

/// Materializes the announcements in `eligible` whose flag for `event` is
/// set, one fresh notification per match, in order.
///
/// Pure: it does not touch the registry; the caller appends the returned
/// batch. Repeated firings of the same event produce new notifications
/// each time — one per occurrence, no deduplication.
pub fn fire(
    event: TriggerEvent,
    eligible: &[Announcement],
    now: DateTime<Utc>,
) -> Vec<Notification> {
    eligible
        .iter()
        .filter(|a| a.fires_on(event))
        .map(|a| Notification::from_announcement(a, now))
        .collect()
}
