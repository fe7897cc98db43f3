//! Announcement definitions and their targeting attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared_types::{MessageKind, UserRole};

/// Role-based eligibility category of an announcement.
///
/// Exactly one audience per announcement; `All` matches every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    #[default]
    All,
    Normal,
    Vip,
    Vip2,
    Vip3,
    Vip4,
    Admin,
}

impl Audience {
    /// Whether a user with `role` belongs to this audience.
    pub fn matches(&self, role: UserRole) -> bool {
        match self {
            Audience::All => true,
            Audience::Normal => role == UserRole::Normal,
            Audience::Vip => role == UserRole::Vip,
            Audience::Vip2 => role == UserRole::Vip2,
            Audience::Vip3 => role == UserRole::Vip3,
            Audience::Vip4 => role == UserRole::Vip4,
            Audience::Admin => role == UserRole::Admin,
        }
    }
}

/// Domain event that can materialize announcements into notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerEvent {
    Login,
    TripComplete,
    FareCreate,
}

/// An operator-authored message definition.
///
/// Loaded read-only into the store per session and immutable for the
/// session's lifetime; a catalog refresh is the only path to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub audience: Audience,
    /// Inactive announcements are never eligible, regardless of other fields.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub show_on_trip_complete: bool,
    #[serde(default)]
    pub show_on_fare_create: bool,
    #[serde(default)]
    pub show_on_login: bool,
    /// Presentational weight; values above 1 get a highlighted badge.
    /// Has no effect on selection or ordering.
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

fn default_priority() -> i32 {
    1
}

impl Announcement {
    /// Whether the announcement has expired at `now`. Absent `expires_at`
    /// means it never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expiry| expiry <= now)
    }

    /// Whether the matching `show_on_*` flag is set for `event`.
    pub fn fires_on(&self, event: TriggerEvent) -> bool {
        match event {
            TriggerEvent::Login => self.show_on_login,
            TriggerEvent::TripComplete => self.show_on_trip_complete,
            TriggerEvent::FareCreate => self.show_on_fare_create,
        }
    }

    /// Whether the presentation layer should give this announcement
    /// heightened-priority treatment.
    pub fn is_high_priority(&self) -> bool {
        self.priority > 1
    }
}
