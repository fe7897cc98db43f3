//! Types shared across the announcement and notification subsystems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of the current rider or driver, as reported by the auth
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    #[default]
    Normal,
    Vip,
    Vip2,
    Vip3,
    Vip4,
    Admin,
}

impl UserRole {
    /// Parses a role string, mapping unknown or empty values to
    /// [`UserRole::Normal`].
    ///
    /// Roles come from an external auth collaborator; an unrecognized
    /// value is recovered locally rather than surfaced.
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "normal" => UserRole::Normal,
            "vip" => UserRole::Vip,
            "vip2" => UserRole::Vip2,
            "vip3" => UserRole::Vip3,
            "vip4" => UserRole::Vip4,
            "admin" => UserRole::Admin,
            _ => UserRole::Normal,
        }
    }
}

/// Read-only user context passed into targeting: who the user is and what
/// "now" means for expiry checks.
///
/// Always an explicit parameter, never read from ambient state inside the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub role: UserRole,
    pub now: DateTime<Utc>,
}

impl UserContext {
    pub fn new(role: UserRole, now: DateTime<Utc>) -> Self {
        Self { role, now }
    }

    /// Context for `role` with the current wall clock as "now".
    pub fn at_now(role: UserRole) -> Self {
        Self::new(role, Utc::now())
    }
}

/// Presentation category of an announcement or notification.
///
/// Styling only; it has no effect on targeting or ordering. `Promotion`
/// may carry extra UI treatment in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    #[default]
    Info,
    Warning,
    Success,
    Error,
    Promotion,
}
