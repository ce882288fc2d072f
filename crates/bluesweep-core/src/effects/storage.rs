//! Key-value storage effects
//!
//! Keys name whole documents (`custom_events`, `user_profile`, ...); values
//! are opaque bytes. Handlers must make `store` atomic per key.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Storage operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum StorageError {
    /// Key is empty or contains characters the handler cannot persist
    #[error("Invalid key: {reason}")]
    InvalidKey {
        /// What is wrong with the key
        reason: String,
    },
    /// The backend could not read the value
    #[error("Read failed: {0}")]
    ReadFailed(String),
    /// The backend could not persist the value
    #[error("Write failed: {0}")]
    WriteFailed(String),
    /// The backend could not remove the value
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
    /// The backend could not enumerate keys
    #[error("List failed: {0}")]
    ListFailed(String),
}

/// Document storage
#[async_trait]
pub trait StorageEffects: Send + Sync {
    /// Replace the value stored under `key`.
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Read the value under `key`, `None` if absent.
    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove `key`. Returns whether anything was removed.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Sorted keys, optionally filtered by prefix.
    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError>;

    /// Whether `key` holds a value.
    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.retrieve(key).await?.is_some())
    }
}

/// Reject keys a filesystem-backed handler could not map to a single file.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "Key cannot be empty".to_string(),
        });
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StorageError::InvalidKey {
            reason: format!("Key '{key}' may only contain [A-Za-z0-9_-]"),
        });
    }
    Ok(())
}
