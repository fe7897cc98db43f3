//! Targeting: which announcements apply to a user at a point in time.

use crate::announcements::types::Announcement;
use crate::shared_types::UserContext;

/// Computes the subset of `catalog` eligible for the given user context.
///
/// An announcement is kept iff it is active, its audience matches the
/// user's role, and it has not expired at `ctx.now`. This is a stable
/// filter: catalog order is preserved, and `priority` plays no part.
///
/// Pure function of its inputs; re-evaluate whenever role or "now"
/// changes (per session load, or per trigger event to honor expiry).
pub fn eligible_for(catalog: &[Announcement], ctx: &UserContext) -> Vec<Announcement> {
    catalog
        .iter()
        .filter(|a| a.is_active && a.audience.matches(ctx.role) && !a.is_expired(ctx.now))
        .cloned()
        .collect()
}
