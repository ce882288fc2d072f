//! Community cleanup events
//!
//! Document `custom_events`. Field keys per id: `event_{id}_id`, `_title`,
//! `_description`, `_date` (epoch millis), `_time`, `_location`,
//! `_participants`, `_max_participants`, `_image_type` (bundled image code)
//! and `_custom_image_uri`.

use bluesweep_core::time::{epoch, from_millis, to_millis};
use bluesweep_core::{
    BundledImage, CleanupEvent, EventId, ImageRef, NewEvent, Registration, StorageEffects,
};
use std::sync::Arc;
use tokio::sync::watch;

use crate::document::{PreferencesDocument, SnapshotStream};
use crate::error::StoreError;
use crate::preferences::{PrefKey, Preferences};

/// Storage key of the events document.
pub const EVENTS_DOCUMENT_KEY: &str = "custom_events";

const COUNT_KEY: &str = "event_count";

const FIELDS: [&str; 10] = [
    "id",
    "title",
    "description",
    "date",
    "time",
    "location",
    "participants",
    "max_participants",
    "image_type",
    "custom_image_uri",
];

fn count_key() -> PrefKey<i64> {
    PrefKey::new(COUNT_KEY)
}

fn field<T>(id: u32, name: &str) -> PrefKey<T> {
    PrefKey::new(format!("event_{id}_{name}"))
}

/// Highest id handed out. A counter that is missing, mistyped or below a
/// live slot is raised to the highest `event_{id}_id` present.
fn read_count(prefs: &Preferences) -> u32 {
    let counter = prefs
        .get(&count_key())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0);
    counter.max(prefs.highest_slot("event"))
}

fn read_u32(prefs: &Preferences, key: &PrefKey<i64>) -> u32 {
    prefs
        .get(key)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

fn decode_slot(prefs: &Preferences, slot: u32) -> Option<CleanupEvent> {
    let id = prefs
        .get(&field::<i64>(slot, "id"))
        .and_then(|v| u32::try_from(v).ok())?;

    let image = match prefs.get(&field::<String>(slot, "custom_image_uri")) {
        Some(uri) => ImageRef::Uri(uri),
        None => ImageRef::Bundled(
            prefs
                .get(&field::<i64>(slot, "image_type"))
                .and_then(BundledImage::from_code)
                .unwrap_or_default(),
        ),
    };

    Some(CleanupEvent {
        id: EventId::new(id),
        title: prefs.get_or(&field(slot, "title"), String::new()),
        description: prefs.get_or(&field(slot, "description"), String::new()),
        date: prefs
            .get(&field::<i64>(slot, "date"))
            .map_or_else(epoch, from_millis),
        time: prefs.get_or(&field(slot, "time"), String::new()),
        location: prefs.get_or(&field(slot, "location"), String::new()),
        participants: read_u32(prefs, &field(slot, "participants")),
        max_participants: read_u32(prefs, &field(slot, "max_participants")),
        image,
    })
}

/// Decode every live event, soonest first.
fn decode_all(prefs: &Preferences) -> Vec<CleanupEvent> {
    let mut events: Vec<_> = (1..=read_count(prefs))
        .filter_map(|slot| decode_slot(prefs, slot))
        .collect();
    events.sort_by_key(|e| e.date);
    events
}

fn write_fields(prefs: &mut Preferences, id: u32, event: &NewEvent) {
    prefs.set(&field(id, "title"), event.title.clone());
    prefs.set(&field(id, "description"), event.description.clone());
    prefs.set(&field(id, "date"), to_millis(&event.date));
    prefs.set(&field(id, "time"), event.time.clone());
    prefs.set(&field(id, "location"), event.location.clone());
    prefs.set(
        &field(id, "max_participants"),
        i64::from(event.max_participants),
    );
    match &event.image {
        ImageRef::Uri(uri) => {
            prefs.set(&field(id, "custom_image_uri"), uri.clone());
            prefs.remove(field::<i64>(id, "image_type").name());
        }
        ImageRef::Bundled(image) => {
            prefs.set(&field(id, "image_type"), image.code());
            prefs.remove(field::<String>(id, "custom_image_uri").name());
        }
    }
}

fn remove_slot(prefs: &mut Preferences, id: u32) -> bool {
    let mut removed = false;
    for name in FIELDS {
        removed |= prefs.remove(field::<i64>(id, name).name());
    }
    removed
}

/// Store of user-created cleanup events.
#[derive(Debug)]
pub struct EventDataStore {
    document: PreferencesDocument,
    snapshots: watch::Sender<Vec<CleanupEvent>>,
}

impl EventDataStore {
    /// Load the events document from `storage`.
    pub async fn open(storage: Arc<dyn StorageEffects>) -> Result<Self, StoreError> {
        let document = PreferencesDocument::open(storage, EVENTS_DOCUMENT_KEY).await?;
        let (snapshots, _) = watch::channel(decode_all(&document.snapshot().await));
        Ok(Self {
            document,
            snapshots,
        })
    }

    /// Current events, date ascending.
    pub fn list(&self) -> Vec<CleanupEvent> {
        self.snapshots.borrow().clone()
    }

    /// Event with the given id, if it is live.
    pub fn get(&self, id: EventId) -> Option<CleanupEvent> {
        self.snapshots.borrow().iter().find(|e| e.id == id).cloned()
    }

    /// Number of live events.
    pub fn len(&self) -> usize {
        self.snapshots.borrow().len()
    }

    /// Whether no events are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Follow the event list. The current list is yielded first.
    pub fn subscribe(&self) -> SnapshotStream<Vec<CleanupEvent>> {
        SnapshotStream::new(self.snapshots.subscribe())
    }

    /// The id the next `add` will assign.
    pub async fn next_id(&self) -> EventId {
        EventId::new(read_count(&self.document.snapshot().await)).next()
    }

    /// Persist a new event with zero participants.
    pub async fn add(&self, event: NewEvent) -> Result<CleanupEvent, StoreError> {
        let (prefs, id) = self
            .document
            .edit(|prefs| {
                let id = read_count(prefs).saturating_add(1);
                prefs.set(&count_key(), i64::from(id));
                prefs.set(&field(id, "id"), i64::from(id));
                prefs.set(&field(id, "participants"), 0_i64);
                write_fields(prefs, id, &event);
                id
            })
            .await?;
        self.publish(&prefs);

        let created = decode_slot(&prefs, id).ok_or_else(|| StoreError::Decode {
            key: EVENTS_DOCUMENT_KEY.to_string(),
            reason: format!("event {id} missing after write"),
        })?;
        tracing::info!(id = %created.id, title = %created.title, "Created event");
        Ok(created)
    }

    /// Rewrite an event's editable fields; participants are kept. Returns
    /// `false` if the event does not exist.
    pub async fn update(&self, id: EventId, event: NewEvent) -> Result<bool, StoreError> {
        let (prefs, found) = self
            .document
            .edit(|prefs| {
                if !prefs.contains(field::<i64>(id.value(), "id").name()) {
                    return false;
                }
                write_fields(prefs, id.value(), &event);
                true
            })
            .await?;
        if found {
            self.publish(&prefs);
            tracing::info!(%id, "Updated event");
        }
        Ok(found)
    }

    /// Take one place at the event if any are left.
    pub async fn register(&self, id: EventId) -> Result<Registration, StoreError> {
        let (prefs, outcome) = self
            .document
            .edit(|prefs| {
                let Some(mut event) = decode_slot(prefs, id.value()) else {
                    return Registration::Unknown;
                };
                if !event.try_register() {
                    return Registration::Full;
                }
                prefs.set(
                    &field(id.value(), "participants"),
                    i64::from(event.participants),
                );
                Registration::Registered {
                    participants: event.participants,
                }
            })
            .await?;
        if outcome.is_registered() {
            self.publish(&prefs);
        }
        tracing::info!(%id, ?outcome, "Registration");
        Ok(outcome)
    }

    /// Remove every field of the event. The counter is left alone so the id
    /// is never handed out again.
    pub async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        let (prefs, removed) = self
            .document
            .edit(|prefs| remove_slot(prefs, id.value()))
            .await?;
        if removed {
            self.publish(&prefs);
            tracing::info!(%id, "Deleted event");
        }
        Ok(removed)
    }

    /// Remove all events, keeping the counter.
    pub async fn clear_all(&self) -> Result<usize, StoreError> {
        let (prefs, removed) = self
            .document
            .edit(|prefs| {
                (1..=read_count(prefs))
                    .filter(|&slot| remove_slot(prefs, slot))
                    .count()
            })
            .await?;
        self.publish(&prefs);
        tracing::info!(removed, "Cleared events");
        Ok(removed)
    }

    fn publish(&self, prefs: &Preferences) {
        self.snapshots.send_replace(decode_all(prefs));
    }
}
