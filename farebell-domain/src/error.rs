//! Top-level error type for the Farebell domain layer.

use thiserror::Error;

use crate::announcements::AnnouncementError;

/// Aggregates the error types of the domain layer's subsystems.
///
/// The lifecycle operations themselves (targeting, dispatch, registry
/// mutations) are total and never fail; errors only arise at the edges,
/// when a catalog source or the infrastructure layer misbehaves.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Announcement catalog acquisition failed.
    #[error("Announcement error: {0}")]
    Announcement(#[from] AnnouncementError),

    /// Infrastructure-level failure (configuration, logging, filesystem).
    #[error("Core error: {0}")]
    Core(#[from] farebell_core::error::CoreError),
}
