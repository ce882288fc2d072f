use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::media::ImageRef;
use crate::identifiers::EventId;

/// A cleanup event.
///
/// `participants` never exceeds `max_participants` through
/// [`CleanupEvent::try_register`]; records decoded from storage are taken
/// as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanupEvent {
    /// Event identifier
    pub id: EventId,
    /// Title shown on the card
    pub title: String,
    /// Longer description
    pub description: String,
    /// Day of the event
    pub date: DateTime<Utc>,
    /// Free-form time range, e.g. "8:00 AM - 12:00 PM"
    pub time: String,
    /// Free-form location text
    pub location: String,
    /// Registered participants
    pub participants: u32,
    /// Capacity
    pub max_participants: u32,
    /// Card image
    pub image: ImageRef,
}

impl CleanupEvent {
    /// Whether the event has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }

    /// Remaining places.
    pub fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.participants)
    }

    /// Register one participant. Returns `false` (and changes nothing) when
    /// the event is full.
    pub fn try_register(&mut self) -> bool {
        if self.participants < self.max_participants {
            self.participants += 1;
            true
        } else {
            false
        }
    }

    /// Label for the card's action button.
    pub fn action_label(&self) -> &'static str {
        if self.is_full() {
            "Full"
        } else {
            "Register"
        }
    }
}

/// Fields of an event created by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Title shown on the card
    pub title: String,
    /// Longer description
    pub description: String,
    /// Day of the event
    pub date: DateTime<Utc>,
    /// Free-form time range
    pub time: String,
    /// Free-form location text
    pub location: String,
    /// Capacity; at least 1
    pub max_participants: u32,
    /// Card image
    pub image: ImageRef,
}

/// Outcome of a registration attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Registration {
    /// One place was taken
    Registered {
        /// Participant count after registering
        participants: u32,
    },
    /// Capacity reached, nothing changed
    Full,
    /// No such event
    Unknown,
}

impl Registration {
    /// Whether a place was taken.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}
