//! Profile badges and the counters that unlock them

use bluesweep_core::{Achievement, Badge, BundledImage, ImpactStats};

/// Static badge definition. `unlocked_by` is `None` for badges that cannot
/// be earned yet.
#[derive(Debug, Clone, Copy)]
pub struct BadgeSpec {
    /// Badge title
    pub name: &'static str,
    /// What unlocks it
    pub description: &'static str,
    /// Badge artwork
    pub icon: BundledImage,
    /// Unlock rule over the activity counters
    pub unlocked_by: Option<fn(&ImpactStats) -> bool>,
}

fn ocean_guardian(stats: &ImpactStats) -> bool {
    stats.events_attended >= 10
}

fn waste_warrior(stats: &ImpactStats) -> bool {
    stats.waste_reports >= 25
}

fn community_leader(stats: &ImpactStats) -> bool {
    stats.events_organized >= 3
}

/// Every badge, in display order.
pub const BADGES: [BadgeSpec; 5] = [
    BadgeSpec {
        name: "Ocean Guardian",
        description: "Participated in 10+ cleanup events",
        icon: BundledImage::Beach,
        unlocked_by: Some(ocean_guardian),
    },
    BadgeSpec {
        name: "Waste Warrior",
        description: "Reported 25+ waste items",
        icon: BundledImage::PlasticPollution,
        unlocked_by: Some(waste_warrior),
    },
    BadgeSpec {
        name: "Community Leader",
        description: "Organized 3+ cleanup events",
        icon: BundledImage::Mangrove,
        unlocked_by: Some(community_leader),
    },
    BadgeSpec {
        name: "Marine Expert",
        description: "Completed all marine education modules",
        icon: BundledImage::OceanAcidification,
        unlocked_by: None,
    },
    BadgeSpec {
        name: "Global Impact",
        description: "Contributed to international cleanup efforts",
        icon: BundledImage::River,
        unlocked_by: None,
    },
];

/// All badges with their unlock state for `stats`.
pub fn badges_for(stats: &ImpactStats) -> Vec<Badge> {
    BADGES
        .iter()
        .map(|spec| Badge {
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            icon: spec.icon,
            unlocked: spec.unlocked_by.is_some_and(|check| check(stats)),
        })
        .collect()
}

/// One achievement per unlocked badge.
pub fn achievements_for(stats: &ImpactStats) -> Vec<Achievement> {
    badges_for(stats)
        .into_iter()
        .filter(|badge| badge.unlocked)
        .map(|badge| Achievement {
            title: badge.name,
            description: badge.description,
            date: "Unlocked".to_string(),
            icon: badge.icon,
        })
        .collect()
}
