//! A preference document persisted under one storage key
//!
//! The document is cached in memory and every edit is applied to a copy,
//! written through, and only then committed. A failed write leaves both the
//! cache and the persisted bytes as they were. Edits are serialized by an
//! async mutex held across the write.

use async_lock::Mutex;
use bluesweep_core::StorageEffects;
use std::fmt;
use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

use crate::error::StoreError;
use crate::preferences::Preferences;

/// Stream of full snapshots; yields the current value first.
pub type SnapshotStream<T> = WatchStream<T>;

/// One persisted preference document.
pub struct PreferencesDocument {
    storage: Arc<dyn StorageEffects>,
    key: &'static str,
    current: Mutex<Preferences>,
}

impl fmt::Debug for PreferencesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferencesDocument")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PreferencesDocument {
    /// Load the document, starting empty if it does not exist yet.
    pub async fn open(
        storage: Arc<dyn StorageEffects>,
        key: &'static str,
    ) -> Result<Self, StoreError> {
        let prefs = match storage.retrieve(key).await? {
            Some(bytes) => decode(key, &bytes)?,
            None => Preferences::new(),
        };
        tracing::debug!(key, entries = prefs.len(), "Opened preference document");
        Ok(Self {
            storage,
            key,
            current: Mutex::new(prefs),
        })
    }

    /// Storage key the document lives under.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Copy of the committed document.
    pub async fn snapshot(&self) -> Preferences {
        self.current.lock().await.clone()
    }

    /// Apply `f` to a copy of the document and persist it. Returns the new
    /// document and whatever `f` returned.
    pub async fn edit<R, F>(&self, f: F) -> Result<(Preferences, R), StoreError>
    where
        F: FnOnce(&mut Preferences) -> R,
    {
        let mut guard = self.current.lock().await;
        let mut next = guard.clone();
        let out = f(&mut next);

        let bytes = serde_json::to_vec(&next).map_err(|e| StoreError::Encode {
            key: self.key.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.store(self.key, bytes).await?;

        *guard = next.clone();
        Ok((next, out))
    }
}

fn decode(key: &str, bytes: &[u8]) -> Result<Preferences, StoreError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Decode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    match value {
        serde_json::Value::Object(object) => Ok(Preferences::from_json_object(object)),
        other => Err(StoreError::Decode {
            key: key.to_string(),
            reason: format!("expected an object, found {other}"),
        }),
    }
}
