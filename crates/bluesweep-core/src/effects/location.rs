//! Device location effects

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::LatLng;

/// A resolved device location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleLocation {
    /// Display text, e.g. "Shah Alam, Selangor"
    pub address: String,
    /// Coordinates of the place.
    pub position: LatLng,
}

/// Device location and reverse geocoding
#[async_trait]
pub trait LocationEffects: Send + Sync {
    /// Whether the user granted location access.
    fn has_permission(&self) -> bool;

    /// Current location; `None` without permission.
    async fn current_location(&self) -> Option<SampleLocation>;

    /// Address text for a coordinate. Falls back to `"lat, lng"`.
    async fn address_from_coordinates(&self, position: LatLng) -> String;
}
