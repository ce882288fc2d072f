//! Unified error system for BlueSweep
//!
//! One flat error type shared by every layer. Layer-specific errors
//! (`StorageError`, `AuthError`, `StoreError`) convert into it.

use serde::{Deserialize, Serialize};

use crate::effects::{AuthError, StorageError};

/// Unified error type for all BlueSweep operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum BlueSweepError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Key-value storage failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// The auth provider rejected a request
    #[error("Auth error: {message}")]
    Auth {
        /// Provider message, shown to the user verbatim
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl BlueSweepError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Short category label for logs
    pub fn category(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "invalid",
            Self::NotFound { .. } => "not_found",
            Self::Storage { .. } => "storage",
            Self::Serialization { .. } => "serialization",
            Self::Auth { .. } => "auth",
            Self::Internal { .. } => "internal",
        }
    }
}

impl From<StorageError> for BlueSweepError {
    fn from(err: StorageError) -> Self {
        Self::storage(err.to_string())
    }
}

impl From<AuthError> for BlueSweepError {
    fn from(err: AuthError) -> Self {
        Self::Auth {
            message: err.message,
        }
    }
}

/// Result alias using the unified error
pub type Result<T> = std::result::Result<T, BlueSweepError>;
