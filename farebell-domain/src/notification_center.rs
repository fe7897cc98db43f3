//! Session-level composition of store, dispatcher, and registry.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::announcements::{AnnouncementError, AnnouncementProvider, AnnouncementStore, TriggerEvent};
use crate::notifications::dispatcher::fire;
use crate::notifications::registry::NotificationRegistry;
use crate::notifications::types::{Notification, NotificationInput};
use crate::shared_types::UserContext;

/// Facade wiring the announcement store, trigger dispatch, and the
/// notification registry for one app session.
///
/// The presentation layer calls [`handle_event`](Self::handle_event) at
/// the three domain-event call sites (login, trip completion, fare
/// creation) and mutates read state directly on the registry.
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Loads a fresh catalog through `provider` into the store, returning
    /// the catalog size.
    ///
    /// On provider failure the previous catalog stays in place, so a
    /// flaky catalog source degrades to stale announcements rather than
    /// none.
    async fn refresh_catalog(
        &self,
        provider: &dyn AnnouncementProvider,
    ) -> Result<usize, AnnouncementError>;

    /// Handles a domain event: computes the eligible announcement set for
    /// `ctx`, fires the matching triggers, appends the resulting batch to
    /// the registry, and returns it.
    async fn handle_event(&self, event: TriggerEvent, ctx: &UserContext) -> Vec<Notification>;

    /// Posts a standalone notification not backed by any announcement.
    async fn post(&self, input: NotificationInput) -> Notification;

    /// The registry, for presentation-layer reads and mutations.
    fn registry(&self) -> Arc<dyn NotificationRegistry>;
}

pub struct DefaultNotificationCenter {
    store: Arc<dyn AnnouncementStore>,
    registry: Arc<dyn NotificationRegistry>,
}

impl DefaultNotificationCenter {
    pub fn new(store: Arc<dyn AnnouncementStore>, registry: Arc<dyn NotificationRegistry>) -> Self {
        Self { store, registry }
    }
}

#[async_trait]
impl NotificationCenter for DefaultNotificationCenter {
    async fn refresh_catalog(
        &self,
        provider: &dyn AnnouncementProvider,
    ) -> Result<usize, AnnouncementError> {
        let catalog = match provider.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "Catalog refresh failed, keeping previous catalog");
                return Err(e);
            }
        };
        let count = catalog.len();
        self.store.load(catalog).await;
        info!(count, "Announcement catalog refreshed");
        Ok(count)
    }

    async fn handle_event(&self, event: TriggerEvent, ctx: &UserContext) -> Vec<Notification> {
        let eligible = self.store.eligible_for(ctx).await;
        let batch = fire(event, &eligible, ctx.now);
        if !batch.is_empty() {
            info!(
                ?event,
                role = ?ctx.role,
                count = batch.len(),
                "Trigger event materialized notifications"
            );
            self.registry.extend(batch.clone()).await;
        }
        batch
    }

    async fn post(&self, input: NotificationInput) -> Notification {
        let notification = Notification::new(input, Utc::now());
        self.registry.append(notification.clone()).await;
        notification
    }

    fn registry(&self) -> Arc<dyn NotificationRegistry> {
        Arc::clone(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announcements::{
        Announcement, Audience, InMemoryAnnouncementStore, StaticAnnouncementProvider,
        TomlCatalogProvider,
    };
    use crate::notifications::registry::InMemoryNotificationRegistry;
    use crate::shared_types::{MessageKind, UserRole};
    use uuid::Uuid;

    fn login_announcement(title: &str, audience: Audience) -> Announcement {
        Announcement {
            id: Uuid::new_v4(),
            title: title.to_string(),
            message: "body".to_string(),
            kind: MessageKind::Info,
            audience,
            is_active: true,
            show_on_trip_complete: false,
            show_on_fare_create: false,
            show_on_login: true,
            priority: 1,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    fn center() -> DefaultNotificationCenter {
        DefaultNotificationCenter::new(
            Arc::new(InMemoryAnnouncementStore::new()),
            Arc::new(InMemoryNotificationRegistry::new()),
        )
    }

    #[tokio::test]
    async fn refresh_then_handle_event_appends_to_registry() {
        let center = center();
        let provider = StaticAnnouncementProvider::new(vec![
            login_announcement("for everyone", Audience::All),
            login_announcement("vip perk", Audience::Vip),
        ]);
        assert_eq!(center.refresh_catalog(&provider).await.unwrap(), 2);

        let ctx = UserContext::at_now(UserRole::Normal);
        let batch = center.handle_event(TriggerEvent::Login, &ctx).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].title, "for everyone");

        let registry = center.registry();
        assert_eq!(registry.all().await, batch);
        assert_eq!(registry.unread_count().await, 1);
    }

    #[tokio::test]
    async fn handle_event_without_matches_touches_nothing() {
        let center = center();
        let provider =
            StaticAnnouncementProvider::new(vec![login_announcement("login only", Audience::All)]);
        center.refresh_catalog(&provider).await.unwrap();

        let ctx = UserContext::at_now(UserRole::Normal);
        let batch = center.handle_event(TriggerEvent::FareCreate, &ctx).await;
        assert!(batch.is_empty());
        assert!(center.registry().all().await.is_empty());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_catalog() {
        let center = center();
        let good =
            StaticAnnouncementProvider::new(vec![login_announcement("stable", Audience::All)]);
        center.refresh_catalog(&good).await.unwrap();

        let bad = TomlCatalogProvider::new("/nonexistent/catalog.toml");
        assert!(center.refresh_catalog(&bad).await.is_err());

        let ctx = UserContext::at_now(UserRole::Normal);
        let batch = center.handle_event(TriggerEvent::Login, &ctx).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].title, "stable");
    }

    #[tokio::test]
    async fn post_creates_standalone_notification() {
        let center = center();
        let posted = center
            .post(NotificationInput {
                title: "Payout sent".to_string(),
                message: "Weekly payout has been transferred.".to_string(),
                kind: MessageKind::Success,
            })
            .await;
        assert!(posted.announcement_id.is_none());
        assert!(!posted.is_read);

        let all = center.registry().all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, posted.id);
    }
}
