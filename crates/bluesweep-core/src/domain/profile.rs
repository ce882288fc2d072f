use serde::{Deserialize, Serialize};

use super::media::{BundledImage, ImageRef};

/// Upper bound of the impact score.
pub const MAX_IMPACT_SCORE: u8 = 100;

/// Activity counters feeding the impact score and badge unlocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStats {
    /// Events registered for
    pub events_attended: u32,
    /// Reports submitted
    pub waste_reports: u32,
    /// Events created
    pub events_organized: u32,
}

impl ImpactStats {
    /// Score in `0..=100`: 5 per event attended, 2 per report, 10 per event
    /// organized.
    pub fn impact_score(&self) -> u8 {
        let raw = u64::from(self.events_attended) * 5
            + u64::from(self.waste_reports) * 2
            + u64::from(self.events_organized) * 10;
        raw.min(u64::from(MAX_IMPACT_SCORE)) as u8
    }
}

/// The signed-in user's profile as shown on the profile screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Handle, e.g. `@marina`
    pub username: String,
    /// Short bio
    pub bio: String,
    /// Free-text home location
    pub location: String,
    /// Membership line under the name
    pub join_date: String,
    /// Events registered for
    pub events_attended: u32,
    /// Reports submitted
    pub waste_reports: u32,
    /// Events created
    pub events_organized: u32,
    /// Always within `0..=MAX_IMPACT_SCORE`
    pub impact_score: u8,
    /// Profile picture
    pub avatar: ImageRef,
}

impl UserProfile {
    /// Build a profile from text fields and counters. The impact score is
    /// derived from the counters.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        bio: impl Into<String>,
        location: impl Into<String>,
        stats: ImpactStats,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            bio: bio.into(),
            location: location.into(),
            join_date: "Joined BlueSweep".to_string(),
            events_attended: stats.events_attended,
            waste_reports: stats.waste_reports,
            events_organized: stats.events_organized,
            impact_score: stats.impact_score(),
            avatar: ImageRef::Bundled(BundledImage::Mascot),
        }
    }

    /// The counters the score is derived from.
    pub fn stats(&self) -> ImpactStats {
        ImpactStats {
            events_attended: self.events_attended,
            waste_reports: self.waste_reports,
            events_organized: self.events_organized,
        }
    }

    /// Score as a percentage label, e.g. `"42/100"`.
    pub fn impact_label(&self) -> String {
        format!("{}/{}", self.impact_score.min(MAX_IMPACT_SCORE), MAX_IMPACT_SCORE)
    }
}

/// A badge on the profile screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge title
    pub name: String,
    /// What unlocks it
    pub description: String,
    /// Badge artwork
    pub icon: BundledImage,
    /// Whether the user has earned it
    pub unlocked: bool,
}

/// An earned achievement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Achievement title
    pub title: String,
    /// What was achieved
    pub description: String,
    /// When, as display text
    pub date: String,
    /// Achievement artwork
    pub icon: BundledImage,
}
