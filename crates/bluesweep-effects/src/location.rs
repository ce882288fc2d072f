//! Sample location provider
//!
//! Stands in for the device location service with five canned Malaysian
//! places. Reverse geocoding only knows those same places.

use async_trait::async_trait;
use bluesweep_core::{LatLng, LocationEffects, SampleLocation};
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Canned places: address, latitude, longitude.
pub const SAMPLE_LOCATIONS: [(&str, f64, f64); 5] = [
    ("Kuala Lumpur, Malaysia", 3.139, 101.6869),
    ("Shah Alam, Malaysia", 3.0733, 101.5185),
    ("Penang, Malaysia", 5.4141, 100.3288),
    ("Johor Bahru, Malaysia", 1.4927, 103.7414),
    ("Putrajaya, Malaysia", 2.9264, 101.6964),
];

/// Coordinates closer than this (in degrees, per axis) resolve to a
/// canned address.
const MATCH_RADIUS_DEG: f64 = 0.05;

/// How the provider picks among the sample places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Uniformly random on every request
    #[default]
    Random,
    /// Cycle through the list in order
    RoundRobin,
}

/// Location provider returning canned places.
#[derive(Debug)]
pub struct SampleLocationProvider {
    mode: LocationMode,
    permission: AtomicBool,
    cursor: AtomicUsize,
    last: Mutex<Option<SampleLocation>>,
}

impl SampleLocationProvider {
    /// Provider in `mode`, with location access granted or not.
    pub fn new(mode: LocationMode, permission: bool) -> Self {
        Self {
            mode,
            permission: AtomicBool::new(permission),
            cursor: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// How places are picked.
    pub fn mode(&self) -> LocationMode {
        self.mode
    }

    /// Grant or revoke location access.
    pub fn set_permission(&self, granted: bool) {
        self.permission.store(granted, Ordering::Relaxed);
    }

    /// The most recent location handed out, if any.
    pub fn last_location(&self) -> Option<SampleLocation> {
        self.last.lock().clone()
    }

    fn pick(&self) -> usize {
        match self.mode {
            LocationMode::Random => rand::thread_rng().gen_range(0..SAMPLE_LOCATIONS.len()),
            LocationMode::RoundRobin => {
                self.cursor.fetch_add(1, Ordering::Relaxed) % SAMPLE_LOCATIONS.len()
            }
        }
    }
}

impl Default for SampleLocationProvider {
    fn default() -> Self {
        Self::new(LocationMode::Random, true)
    }
}

#[async_trait]
impl LocationEffects for SampleLocationProvider {
    fn has_permission(&self) -> bool {
        self.permission.load(Ordering::Relaxed)
    }

    async fn current_location(&self) -> Option<SampleLocation> {
        if !self.has_permission() {
            tracing::debug!("Location requested without permission");
            return None;
        }
        let (address, latitude, longitude) = SAMPLE_LOCATIONS[self.pick()];
        let location = SampleLocation {
            address: address.to_string(),
            position: LatLng::new(latitude, longitude),
        };
        *self.last.lock() = Some(location.clone());
        Some(location)
    }

    async fn address_from_coordinates(&self, position: LatLng) -> String {
        SAMPLE_LOCATIONS
            .iter()
            .find(|(_, lat, lng)| {
                (lat - position.latitude).abs() < MATCH_RADIUS_DEG
                    && (lng - position.longitude).abs() < MATCH_RADIUS_DEG
            })
            .map(|(address, _, _)| (*address).to_string())
            .unwrap_or_else(|| position.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_robin_cycles_in_order() {
        let provider = SampleLocationProvider::new(LocationMode::RoundRobin, true);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(provider.current_location().await.unwrap().address);
        }
        assert_eq!(seen[0], "Kuala Lumpur, Malaysia");
        assert_eq!(seen[4], "Putrajaya, Malaysia");
        assert_eq!(seen[5], seen[0]);
        assert_eq!(
            provider.last_location().map(|l| l.address),
            Some("Kuala Lumpur, Malaysia".to_string())
        );
    }

    #[tokio::test]
    async fn random_mode_stays_in_catalog() {
        let provider = SampleLocationProvider::default();
        for _ in 0..20 {
            let location = provider.current_location().await.unwrap();
            assert!(SAMPLE_LOCATIONS
                .iter()
                .any(|(address, _, _)| *address == location.address));
        }
    }

    #[tokio::test]
    async fn no_location_without_permission() {
        let provider = SampleLocationProvider::new(LocationMode::RoundRobin, false);
        assert!(provider.current_location().await.is_none());
        provider.set_permission(true);
        assert!(provider.current_location().await.is_some());
    }

    #[tokio::test]
    async fn reverse_geocode_falls_back_to_coordinates() {
        let provider = SampleLocationProvider::default();
        assert_eq!(
            provider
                .address_from_coordinates(LatLng::new(5.41, 100.33))
                .await,
            "Penang, Malaysia"
        );
        assert_eq!(
            provider
                .address_from_coordinates(LatLng::new(10.5, 20.25))
                .await,
            "10.5, 20.25"
        );
    }
}
