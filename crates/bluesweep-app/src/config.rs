//! Application configuration

use bluesweep_effects::LocationMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory for persisted documents, relative to the working
/// directory.
pub const DEFAULT_DATA_DIR: &str = ".bluesweep";

/// Settings for building an [`AppCore`](crate::AppCore).
///
/// Every field has a default, so a partial (or empty) TOML table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the filesystem storage handler keeps its documents
    pub data_dir: PathBuf,
    /// How the sample location provider picks a place
    pub location_mode: LocationMode,
    /// Whether location access is granted
    pub location_permission: bool,
    /// List the built-in featured events next to community events
    pub show_featured_events: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            location_mode: LocationMode::default(),
            location_permission: true,
            show_featured_events: true,
        }
    }
}

impl AppConfig {
    /// Same config with documents under `data_dir`.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
