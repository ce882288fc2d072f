//! The signed-in user's editable profile fields
//!
//! Document `user_profile` with keys `user_name`, `user_bio`,
//! `user_location`, `user_username` and `user_events_attended`.

use bluesweep_core::StorageEffects;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

use crate::document::{PreferencesDocument, SnapshotStream};
use crate::error::StoreError;
use crate::preferences::{PrefKey, Preferences};

/// Storage key of the profile document.
pub const PROFILE_DOCUMENT_KEY: &str = "user_profile";

/// Bio shown until the user writes one.
pub const DEFAULT_BIO: &str = "Ocean enthusiast and marine conservationist";
/// Location shown until the user sets one.
pub const DEFAULT_LOCATION: &str = "Earth";

const NAME: &str = "user_name";
const BIO: &str = "user_bio";
const LOCATION: &str = "user_location";
const USERNAME: &str = "user_username";
const EVENTS_ATTENDED: &str = "user_events_attended";

/// Profile fields as persisted, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Display name; empty until set.
    pub name: String,
    /// Short bio.
    pub bio: String,
    /// Free-text home location.
    pub location: String,
    /// Handle shown next to the name.
    pub username: String,
    /// Events the user registered for.
    pub events_attended: u32,
}

impl Default for StoredProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            bio: DEFAULT_BIO.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            username: String::new(),
            events_attended: 0,
        }
    }
}

fn text(name: &str) -> PrefKey<String> {
    PrefKey::new(name)
}

fn decode(prefs: &Preferences) -> StoredProfile {
    let defaults = StoredProfile::default();
    StoredProfile {
        name: prefs.get_or(&text(NAME), defaults.name),
        bio: prefs.get_or(&text(BIO), defaults.bio),
        location: prefs.get_or(&text(LOCATION), defaults.location),
        username: prefs.get_or(&text(USERNAME), defaults.username),
        events_attended: prefs
            .get(&PrefKey::<i64>::new(EVENTS_ATTENDED))
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(defaults.events_attended),
    }
}

/// Store of the user's profile fields.
#[derive(Debug)]
pub struct UserDataStore {
    document: PreferencesDocument,
    snapshots: watch::Sender<StoredProfile>,
}

impl UserDataStore {
    /// Load the profile document from `storage`.
    pub async fn open(storage: Arc<dyn StorageEffects>) -> Result<Self, StoreError> {
        let document = PreferencesDocument::open(storage, PROFILE_DOCUMENT_KEY).await?;
        let (snapshots, _) = watch::channel(decode(&document.snapshot().await));
        Ok(Self {
            document,
            snapshots,
        })
    }

    /// Current profile with defaults applied.
    pub fn profile(&self) -> StoredProfile {
        self.snapshots.borrow().clone()
    }

    /// Follow the profile. The current value is yielded first.
    pub fn subscribe(&self) -> SnapshotStream<StoredProfile> {
        SnapshotStream::new(self.snapshots.subscribe())
    }

    /// Save all four text fields in one write.
    pub async fn update_profile(
        &self,
        name: impl Into<String>,
        username: impl Into<String>,
        bio: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<(), StoreError> {
        let (name, username, bio, location) =
            (name.into(), username.into(), bio.into(), location.into());
        let (prefs, ()) = self
            .document
            .edit(|prefs| {
                prefs.set(&text(NAME), name);
                prefs.set(&text(USERNAME), username);
                prefs.set(&text(BIO), bio);
                prefs.set(&text(LOCATION), location);
            })
            .await?;
        self.publish(&prefs);
        tracing::info!("Updated profile");
        Ok(())
    }

    /// Count one more attended event. Returns the new total.
    pub async fn increment_events_attended(&self) -> Result<u32, StoreError> {
        let key = PrefKey::<i64>::new(EVENTS_ATTENDED);
        let (prefs, total) = self
            .document
            .edit(|prefs| {
                let total = decode(prefs).events_attended.saturating_add(1);
                prefs.set(&key, i64::from(total));
                total
            })
            .await?;
        self.publish(&prefs);
        tracing::debug!(total, "Events attended");
        Ok(total)
    }

    fn publish(&self, prefs: &Preferences) {
        self.snapshots.send_replace(decode(prefs));
    }
}
