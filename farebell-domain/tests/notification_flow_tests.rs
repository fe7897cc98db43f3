//! End-to-end scenarios for the announcement-to-notification flow.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use farebell_domain::{
    eligible_for, fire, initialize, Announcement, Audience, InMemoryAnnouncementStore,
    MessageKind, NotificationCenter, NotificationRegistry, StaticAnnouncementProvider,
    TriggerEvent, UserContext, UserRole,
};

fn announcement(title: &str, audience: Audience) -> Announcement {
    Announcement {
        id: Uuid::new_v4(),
        title: title.to_string(),
        message: format!("{} body", title),
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

#[tokio::test]
async fn login_scenario_targets_and_materializes() {
    // Catalog: A1 for everyone, A2 for VIPs, both firing on login.
    let a1 = announcement("A1", Audience::All);
    let a2 = announcement("A2", Audience::Vip);

    let now = Utc::now();
    let ctx = UserContext::new(UserRole::Normal, now);
    let eligible = eligible_for(&[a1.clone(), a2], &ctx);
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, a1.id);

    let batch = fire(TriggerEvent::Login, &eligible, now);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].announcement_id, Some(a1.id));
    assert!(!batch[0].is_read);
    assert_eq!(batch[0].created_at, now);
}

#[tokio::test]
async fn expired_announcement_is_excluded_for_every_role() {
    let now = Utc::now();
    let mut a3 = announcement("A3", Audience::All);
    a3.expires_at = Some(now - Duration::days(1));

    for role in [
        UserRole::Normal,
        UserRole::Vip,
        UserRole::Vip2,
        UserRole::Vip3,
        UserRole::Vip4,
        UserRole::Admin,
    ] {
        let ctx = UserContext::new(role, now);
        assert!(
            eligible_for(std::slice::from_ref(&a3), &ctx).is_empty(),
            "expired announcement leaked for {:?}",
            role
        );
    }
}

#[tokio::test]
async fn registry_lifecycle_scenario() {
    let center = initialize();
    let registry = center.registry();

    let provider = StaticAnnouncementProvider::new(vec![
        announcement("N1 source", Audience::All),
        announcement("N2 source", Audience::All),
    ]);
    center.refresh_catalog(&provider).await.unwrap();

    let ctx = UserContext::at_now(UserRole::Normal);
    let batch = center.handle_event(TriggerEvent::Login, &ctx).await;
    assert_eq!(batch.len(), 2);

    // One read, one unread.
    let n1 = batch[0].clone();
    let n2 = batch[1].clone();
    registry.mark_read(n2.id).await;
    assert_eq!(registry.unread_count().await, 1);

    registry.mark_all_read().await;
    assert_eq!(registry.unread_count().await, 0);
    assert!(registry.all().await.iter().all(|n| n.is_read));

    registry.delete(n1.id).await;
    let remaining = registry.all().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, n2.id);
}

#[tokio::test]
async fn repeated_event_duplicates_notifications_per_occurrence() {
    let center = initialize();
    let provider =
        StaticAnnouncementProvider::new(vec![announcement("repeatable", Audience::All)]);
    center.refresh_catalog(&provider).await.unwrap();

    let ctx = UserContext::at_now(UserRole::Normal);
    let first = center.handle_event(TriggerEvent::Login, &ctx).await;
    let second = center.handle_event(TriggerEvent::Login, &ctx).await;
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(first[0].id, second[0].id);
    assert_eq!(first[0].announcement_id, second[0].announcement_id);

    assert_eq!(center.registry().all().await.len(), 2);
    assert_eq!(center.registry().unread_count().await, 2);
}

#[tokio::test]
async fn catalog_reload_does_not_alter_existing_notifications() {
    let store = Arc::new(InMemoryAnnouncementStore::new());
    let registry: Arc<dyn NotificationRegistry> =
        Arc::new(farebell_domain::InMemoryNotificationRegistry::new());
    let center = farebell_domain::DefaultNotificationCenter::new(store, Arc::clone(&registry));

    let original = announcement("Old title", Audience::All);
    let provider = StaticAnnouncementProvider::new(vec![original.clone()]);
    center.refresh_catalog(&provider).await.unwrap();

    let ctx = UserContext::at_now(UserRole::Normal);
    center.handle_event(TriggerEvent::Login, &ctx).await;

    // Operator edits the announcement and the catalog is reloaded.
    let mut edited = original.clone();
    edited.title = "New title".to_string();
    let provider = StaticAnnouncementProvider::new(vec![edited]);
    center.refresh_catalog(&provider).await.unwrap();

    let existing = registry.all().await;
    assert_eq!(existing.len(), 1);
    assert_eq!(existing[0].title, "Old title");
}

#[tokio::test]
async fn admin_sees_admin_and_broadcast_announcements_only() {
    let center = initialize();
    let provider = StaticAnnouncementProvider::new(vec![
        announcement("broadcast", Audience::All),
        announcement("admins", Audience::Admin),
        announcement("vip4 bonus", Audience::Vip4),
    ]);
    center.refresh_catalog(&provider).await.unwrap();

    let ctx = UserContext::at_now(UserRole::Admin);
    let batch = center.handle_event(TriggerEvent::Login, &ctx).await;
    let titles: Vec<&str> = batch.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["broadcast", "admins"]);
}
