//! Record store behaviour over real storage handlers.

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

use assert_matches::assert_matches;
use bluesweep_core::{
    BundledImage, EventId, ImageRef, NewEvent, NewWasteReport, Registration, StorageEffects,
};
use bluesweep_effects::{FilesystemStorageHandler, FixedClock, MemoryStorageHandler};
use bluesweep_store::{EventDataStore, UserDataStore, WasteReportStore, DEFAULT_BIO};
use chrono::{Duration, TimeZone, Utc};
use futures::StreamExt;
use std::sync::Arc;

fn new_event(title: &str, days: i64, capacity: u32) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: "Pick up plastic along the shore".to_string(),
        date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap() + Duration::days(days),
        time: "09:00 AM - 12:00 PM".to_string(),
        location: "Port Dickson, Negeri Sembilan".to_string(),
        max_participants: capacity,
        image: ImageRef::Bundled(BundledImage::River),
    }
}

fn memory() -> Arc<dyn StorageEffects> {
    Arc::new(MemoryStorageHandler::new())
}

#[tokio::test]
async fn events_are_date_ascending_with_sequential_ids() {
    let store = EventDataStore::open(memory()).await.unwrap();
    let late = store.add(new_event("Late", 10, 10)).await.unwrap();
    let early = store.add(new_event("Early", 1, 10)).await.unwrap();

    assert_eq!(late.id, EventId::new(1));
    assert_eq!(early.id, EventId::new(2));
    assert_eq!(late.participants, 0);

    let titles: Vec<_> = store.list().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Early", "Late"]);
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
    let store = EventDataStore::open(memory()).await.unwrap();
    let first = store.add(new_event("One", 1, 10)).await.unwrap();
    store.add(new_event("Two", 2, 10)).await.unwrap();

    assert!(store.delete(first.id).await.unwrap());
    assert!(!store.delete(first.id).await.unwrap());
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id().await, EventId::new(3));

    let third = store.add(new_event("Three", 3, 10)).await.unwrap();
    assert_eq!(third.id, EventId::new(3));
}

#[tokio::test]
async fn clear_all_keeps_counter() {
    let store = EventDataStore::open(memory()).await.unwrap();
    store.add(new_event("One", 1, 10)).await.unwrap();
    store.add(new_event("Two", 2, 10)).await.unwrap();

    assert_eq!(store.clear_all().await.unwrap(), 2);
    assert!(store.is_empty());
    let next = store.add(new_event("Three", 3, 10)).await.unwrap();
    assert_eq!(next.id, EventId::new(3));
}

#[tokio::test]
async fn registration_is_capped() {
    let store = EventDataStore::open(memory()).await.unwrap();
    let event = store.add(new_event("Tiny", 1, 2)).await.unwrap();

    assert_eq!(
        store.register(event.id).await.unwrap(),
        Registration::Registered { participants: 1 }
    );
    assert_eq!(
        store.register(event.id).await.unwrap(),
        Registration::Registered { participants: 2 }
    );
    assert_eq!(store.register(event.id).await.unwrap(), Registration::Full);
    assert_eq!(
        store.register(EventId::new(42)).await.unwrap(),
        Registration::Unknown
    );
    assert_eq!(store.get(event.id).unwrap().participants, 2);
}

#[tokio::test]
async fn update_keeps_participants() {
    let store = EventDataStore::open(memory()).await.unwrap();
    let event = store.add(new_event("Draft", 1, 5)).await.unwrap();
    store.register(event.id).await.unwrap();

    let mut edited = new_event("Final", 4, 8);
    edited.image = ImageRef::Uri("content://picked/7".into());
    assert!(store.update(event.id, edited).await.unwrap());

    let stored = store.get(event.id).unwrap();
    assert_eq!(stored.title, "Final");
    assert_eq!(stored.participants, 1);
    assert_eq!(stored.image, ImageRef::Uri("content://picked/7".into()));
    assert!(!store.update(EventId::new(9), new_event("x", 1, 1)).await.unwrap());
}

#[tokio::test]
async fn events_survive_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn StorageEffects> = Arc::new(FilesystemStorageHandler::new(dir.path()));

    let store = EventDataStore::open(storage.clone()).await.unwrap();
    let created = store.add(new_event("Persisted", 2, 30)).await.unwrap();
    store.register(created.id).await.unwrap();
    drop(store);

    let reopened = EventDataStore::open(storage).await.unwrap();
    let events = reopened.list();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Persisted");
    assert_eq!(events[0].participants, 1);
    assert_eq!(events[0].image, ImageRef::Bundled(BundledImage::River));
}

#[tokio::test]
async fn subscribe_yields_current_then_updates() {
    let store = EventDataStore::open(memory()).await.unwrap();
    let mut stream = store.subscribe();

    assert!(stream.next().await.unwrap().is_empty());
    store.add(new_event("Streamed", 1, 10)).await.unwrap();
    let snapshot = stream.next().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Streamed");
}

#[tokio::test]
async fn reports_are_newest_first() {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    let clock = Arc::new(FixedClock::new(start));
    let store = WasteReportStore::open(memory(), clock.clone()).await.unwrap();

    store
        .add(NewWasteReport {
            description: "Bottles on the beach".into(),
            location: "Penang, Malaysia".into(),
            photo_uri: None,
        })
        .await
        .unwrap();
    clock.advance(Duration::minutes(5));
    let second = store
        .add(NewWasteReport {
            description: "Oil slick".into(),
            location: "Klang".into(),
            photo_uri: Some("content://photo/2".into()),
        })
        .await
        .unwrap();

    let reports = store.list();
    assert_eq!(reports[0].id, second.id);
    assert_eq!(reports[0].date, start + Duration::minutes(5));
    assert!(reports[0].has_photo());
    assert!(!reports[1].has_photo());

    assert!(store.delete(second.id).await.unwrap());
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].description, "Bottles on the beach");
}

#[tokio::test]
async fn profile_defaults_and_updates() {
    let store = UserDataStore::open(memory()).await.unwrap();
    assert_eq!(store.profile().bio, DEFAULT_BIO);

    store
        .update_profile("Marina Tan", "@marina", "Diver", "Kuching")
        .await
        .unwrap();
    assert_eq!(store.increment_events_attended().await.unwrap(), 1);
    assert_eq!(store.increment_events_attended().await.unwrap(), 2);

    let profile = store.profile();
    assert_eq!(profile.name, "Marina Tan");
    assert_eq!(profile.username, "@marina");
    assert_eq!(profile.location, "Kuching");
    assert_eq!(profile.events_attended, 2);
}

#[tokio::test]
async fn corrupt_document_fails_to_open() {
    let storage = memory();
    storage
        .store("custom_events", b"not json".to_vec())
        .await
        .unwrap();
    let result = EventDataStore::open(storage).await;
    assert_matches!(result, Err(bluesweep_store::StoreError::Decode { .. }));
}

#[tokio::test]
async fn store_debug_names_its_document() {
    let store = EventDataStore::open(memory()).await.unwrap();
    assert!(format!("{store:?}").contains("custom_events"));
}

#[tokio::test]
async fn mistyped_counter_does_not_reuse_live_ids() {
    let storage = memory();
    storage
        .store(
            "custom_events",
            br#"{"event_count":"three","event_3_id":3,"event_3_title":"Jetty"}"#.to_vec(),
        )
        .await
        .unwrap();
    let store = EventDataStore::open(storage.clone()).await.unwrap();
    assert_eq!(store.next_id().await, EventId::new(4));

    let added = store.add(new_event("Fresh", 1, 10)).await.unwrap();
    assert_eq!(added.id, EventId::new(4));
    assert_eq!(store.get(EventId::new(3)).unwrap().title, "Jetty");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn out_of_range_report_counter_does_not_reuse_live_ids() {
    let storage = memory();
    storage
        .store(
            "waste_reports",
            br#"{"report_count":-5,"report_2_id":2,"report_2_description":"Nets"}"#.to_vec(),
        )
        .await
        .unwrap();
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()));
    let store = WasteReportStore::open(storage, clock).await.unwrap();

    let added = store
        .add(NewWasteReport {
            description: "Tyres".into(),
            location: "Klang".into(),
            photo_uri: None,
        })
        .await
        .unwrap();
    assert_eq!(added.id.value(), 3);
    let descriptions: Vec<_> = store.list().into_iter().map(|r| r.description).collect();
    assert!(descriptions.contains(&"Nets".to_string()));
    assert_eq!(store.len(), 2);
}
