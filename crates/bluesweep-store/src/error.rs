use bluesweep_core::{BlueSweepError, StorageError};

/// Store operation errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted document is not a JSON object
    #[error("Failed to decode document '{key}': {reason}")]
    Decode {
        /// Storage key of the document
        key: String,
        /// Parser message
        reason: String,
    },

    /// The document could not be serialized
    #[error("Failed to encode document '{key}': {reason}")]
    Encode {
        /// Storage key of the document
        key: String,
        /// Serializer message
        reason: String,
    },
}

impl From<StoreError> for BlueSweepError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Storage(e) => e.into(),
            other => BlueSweepError::serialization(other.to_string()),
        }
    }
}
