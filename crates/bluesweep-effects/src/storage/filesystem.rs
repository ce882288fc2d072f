//! Filesystem storage handler
//!
//! Each key maps to `{base}/{key}.json`. Writes go to a sibling temp file
//! first and are renamed into place, so a crash mid-write never leaves a
//! truncated document behind.

use async_trait::async_trait;
use bluesweep_core::effects::storage::validate_key;
use bluesweep_core::{StorageEffects, StorageError};
use std::path::{Path, PathBuf};
use tokio::fs;

const EXTENSION: &str = "json";

/// Stores each document as a JSON file under a base directory.
#[derive(Debug, Clone)]
pub struct FilesystemStorageHandler {
    base_path: PathBuf,
}

impl FilesystemStorageHandler {
    /// Handler rooted at `base_path`; the directory is created on first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Directory holding the documents.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.{EXTENSION}"))
    }
}

#[async_trait]
impl StorageEffects for FilesystemStorageHandler {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create directory: {e}"))
        })?;

        let file_path = self.path_for(key);
        let tmp_path = self.base_path.join(format!(".{key}.{EXTENSION}.tmp"));
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("Failed to write file: {e}")))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("Failed to replace file: {e}")))?;

        tracing::debug!(key, path = %file_path.display(), "Stored document");
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        match fs::read(self.path_for(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("Failed to read file: {e}"))),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to remove file: {e}"
            ))),
        }
    }

    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StorageError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::ListFailed(format!(
                    "Failed to read directory: {e}"
                )))
            }
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::ListFailed(format!("Failed to read directory entry: {e}"))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if validate_key(key).is_err() {
                continue;
            }
            if prefix.map_or(true, |p| key.starts_with(p)) {
                keys.push(key.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        fs::try_exists(self.path_for(key))
            .await
            .map_err(|e| StorageError::ReadFailed(format!("Failed to stat file: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_retrieve_remove() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FilesystemStorageHandler::new(dir.path().join("data"));

        assert_eq!(handler.retrieve("custom_events").await.unwrap(), None);
        handler
            .store("custom_events", b"{\"event_count\":1}".to_vec())
            .await
            .unwrap();
        assert!(handler.exists("custom_events").await.unwrap());
        assert_eq!(
            handler.retrieve("custom_events").await.unwrap().as_deref(),
            Some(&b"{\"event_count\":1}"[..])
        );
        assert!(dir.path().join("data/custom_events.json").exists());

        assert!(handler.remove("custom_events").await.unwrap());
        assert!(!handler.remove("custom_events").await.unwrap());
        assert!(!handler.exists("custom_events").await.unwrap());
    }

    #[tokio::test]
    async fn list_keys_filters_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FilesystemStorageHandler::new(dir.path());
        for key in ["user_profile", "custom_events", "waste_reports"] {
            handler.store(key, b"{}".to_vec()).await.unwrap();
        }

        assert_eq!(
            handler.list_keys(None).await.unwrap(),
            vec!["custom_events", "user_profile", "waste_reports"]
        );
        assert_eq!(
            handler.list_keys(Some("user")).await.unwrap(),
            vec!["user_profile"]
        );
    }

    #[tokio::test]
    async fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FilesystemStorageHandler::new(dir.path().join("absent"));
        assert!(handler.list_keys(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let handler = FilesystemStorageHandler::new(dir.path());
        let err = handler.store("../escape", Vec::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }
}
