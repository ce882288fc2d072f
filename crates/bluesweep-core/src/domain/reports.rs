use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::ReportId;

/// A submitted waste report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteReport {
    /// Report identifier
    pub id: ReportId,
    /// What was found
    pub description: String,
    /// Where it was found
    pub location: String,
    /// Submission time
    pub date: DateTime<Utc>,
    /// Attached photo, if any
    pub photo_uri: Option<String>,
}

impl WasteReport {
    /// Whether a photo is attached.
    pub fn has_photo(&self) -> bool {
        self.photo_uri.is_some()
    }
}

/// Fields of a report about to be submitted. The timestamp is taken by the
/// store at write time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWasteReport {
    /// What was found
    pub description: String,
    /// Where it was found
    pub location: String,
    /// Attached photo, if any
    pub photo_uri: Option<String>,
}
