//! Domain layer for the Farebell ride-fare application.
//!
//! This crate is the announcement targeting and notification lifecycle
//! engine: it decides which operator-authored announcements apply to the
//! current rider or driver, materializes them into timestamped
//! notifications when qualifying app events occur, and manages the
//! read/unread lifecycle of those notifications for display.
//!
//! Transport, authentication, and rendering are collaborator concerns;
//! this crate consumes already-resolved data and exposes plain operations
//! for a thin presentation layer to call.

pub use farebell_core as core;

pub mod announcements;
pub mod error;
pub mod notification_center;
pub mod notifications;
pub mod shared_types;

pub use announcements::{
    Announcement, AnnouncementError, AnnouncementProvider, AnnouncementStore, Audience,
    InMemoryAnnouncementStore, StaticAnnouncementProvider, TomlCatalogProvider, TriggerEvent,
    eligible_for,
};
pub use error::DomainError;
pub use notification_center::{DefaultNotificationCenter, NotificationCenter};
pub use notifications::{
    fire, InMemoryNotificationRegistry, Notification, NotificationEvent, NotificationInput,
    NotificationRegistry,
};
pub use shared_types::{MessageKind, UserContext, UserRole};

use std::sync::Arc;

/// Initializes the domain layer with in-memory defaults.
///
/// Constructs an empty announcement store, an unbounded notification
/// registry, and the composition facade wiring them together. Callers
/// feed the store through [`NotificationCenter::refresh_catalog`] before
/// handling events.
pub fn initialize() -> Arc<DefaultNotificationCenter> {
    let store = Arc::new(InMemoryAnnouncementStore::new());
    let registry = Arc::new(InMemoryNotificationRegistry::new());
    Arc::new(DefaultNotificationCenter::new(store, registry))
}
