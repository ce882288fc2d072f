//! Record identifiers
//!
//! Ids are allocated by the stores from a persisted counter. They are
//! monotonic and never reused, even after the record is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a community cleanup event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl EventId {
    /// Create an event id
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the id allocated after this one
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event-{}", self.0)
    }
}

impl From<u32> for EventId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<EventId> for u32 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// Identifier of a waste report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub u32);

impl ReportId {
    /// Create a report id
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the id allocated after this one
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "report-{}", self.0)
    }
}

impl From<u32> for ReportId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ReportId> for u32 {
    fn from(id: ReportId) -> Self {
        id.0
    }
}
