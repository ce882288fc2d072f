//! Pollution map dialog
//!
//! Shared by the waste-tracking screen and the event details. Markers live
//! only while the dialog is open. Tapping the map either drops a marker (when
//! a marker type is armed) or, if the host allows it, picks a location from
//! the tapped latitude.

use bluesweep_core::LatLng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geocode::{coordinates_for, location_for_latitude};

/// Kind of pollution a marker reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollutionType {
    /// Plastic debris
    #[default]
    Plastic,
    /// Chemical spill
    Chemical,
    /// Organic waste
    Organic,
}

impl PollutionType {
    /// Every type, in legend order.
    pub fn all() -> &'static [Self] {
        &[Self::Plastic, Self::Chemical, Self::Organic]
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Plastic => "Plastic",
            Self::Chemical => "Chemical",
            Self::Organic => "Organic",
        }
    }

    /// Legend colour name.
    pub fn colour(self) -> &'static str {
        match self {
            Self::Plastic => "red",
            Self::Chemical => "yellow",
            Self::Organic => "green",
        }
    }
}

/// A marker dropped on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionMarker {
    /// Marker id
    pub id: Uuid,
    /// Where it was dropped
    pub position: LatLng,
    /// What it reports
    pub kind: PollutionType,
}

/// Pollution map dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionMapState {
    /// Location text shown under the title
    pub location: String,
    /// Map centre
    pub center: LatLng,
    /// Markers dropped so far
    pub markers: Vec<PollutionMarker>,
    /// Marker type armed for the next tap
    pub placing: Option<PollutionType>,
    /// Marker awaiting removal confirmation
    pub pending_removal: Option<Uuid>,
    /// Whether a tap may pick a location
    pub allow_location_pick: bool,
}

/// Map dialog actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapAction {
    /// Arm a marker type for the next tap
    StartPlacing(PollutionType),
    /// Disarm
    CancelPlacing,
    /// Tap on the map
    Tap(LatLng),
    /// A marker was tapped
    RequestRemoval(Uuid),
    /// Remove the marker awaiting confirmation
    ConfirmRemoval,
    /// Keep the marker
    CancelRemoval,
}

/// Something the host dialog has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    /// A location was picked; the dialog should close
    LocationPicked(String),
}

impl PollutionMapState {
    /// Open the map centred on free-form location text.
    pub fn new(location: impl Into<String>, allow_location_pick: bool) -> Self {
        let location = location.into();
        Self {
            center: coordinates_for(&location),
            location,
            markers: Vec::new(),
            placing: None,
            pending_removal: None,
            allow_location_pick,
        }
    }

    /// Hint shown while a marker type is armed.
    pub fn placing_hint(&self) -> Option<String> {
        self.placing
            .map(|kind| format!("Tap on map to place {} marker", kind.label()))
    }

    /// Text of the removal confirmation, if one is pending.
    pub fn removal_prompt(&self) -> Option<String> {
        let id = self.pending_removal?;
        let marker = self.markers.iter().find(|m| m.id == id)?;
        Some(format!("Remove this {} waste marker?", marker.kind.label()))
    }

    /// Apply an action. Returns what the host should react to.
    pub fn update(&mut self, action: MapAction) -> Option<MapOutcome> {
        match action {
            MapAction::StartPlacing(kind) => self.placing = Some(kind),
            MapAction::CancelPlacing => self.placing = None,
            MapAction::Tap(position) => return self.tap(position),
            MapAction::RequestRemoval(id) => {
                if self.markers.iter().any(|m| m.id == id) {
                    self.pending_removal = Some(id);
                }
            }
            MapAction::ConfirmRemoval => {
                if let Some(id) = self.pending_removal.take() {
                    self.markers.retain(|m| m.id != id);
                }
            }
            MapAction::CancelRemoval => self.pending_removal = None,
        }
        None
    }

    fn tap(&mut self, position: LatLng) -> Option<MapOutcome> {
        if let Some(kind) = self.placing.take() {
            self.markers.push(PollutionMarker {
                id: Uuid::new_v4(),
                position,
                kind,
            });
            return None;
        }
        self.allow_location_pick.then(|| {
            MapOutcome::LocationPicked(location_for_latitude(position.latitude).to_string())
        })
    }
}
