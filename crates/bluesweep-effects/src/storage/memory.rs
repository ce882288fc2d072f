//! In-memory storage handler for tests and ephemeral sessions

use async_trait::async_trait;
use bluesweep_core::effects::storage::validate_key;
use bluesweep_core::{StorageEffects, StorageError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage handler. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorageHandler {
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStorageHandler {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageEffects for MemoryStorageHandler {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut data = self.data.write().await;
        data.insert(key.to_string(), value);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        let mut data = self.data.write().await;
        Ok(data.remove(key).is_some())
    }

    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError> {
        let data = self.data.read().await;
        Ok(data
            .keys()
            .filter(|k| prefix.map_or(true, |p| k.starts_with(p)))
            .cloned()
            .collect())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        let data = self.data.read().await;
        Ok(data.contains_key(key))
    }
}
