//! Transient user notifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a toast, used by frontends for styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToastLevel {
    /// Neutral information
    #[default]
    Info,
    /// An action completed
    Success,
    /// Input needs fixing
    Warning,
    /// An action failed
    Error,
}

impl ToastLevel {
    /// Short label for plain-text frontends.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "ok",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// A short message shown to the user once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Text shown to the user
    pub message: String,
    /// Styling hint
    pub level: ToastLevel,
}

impl Toast {
    /// Toast with an explicit level.
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    /// Neutral toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    /// Success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    /// Warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    /// Error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
