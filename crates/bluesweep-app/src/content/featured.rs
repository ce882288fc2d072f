//! Featured sample events shown alongside community events

use bluesweep_core::{BundledImage, CleanupEvent, EventId, ImageRef};
use chrono::{DateTime, Duration, Utc};

/// Static definition of a featured event.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedEventSpec {
    /// Id within the featured list
    pub id: u32,
    /// Card title
    pub title: &'static str,
    /// Longer description
    pub description: &'static str,
    /// Days after app start
    pub days_ahead: i64,
    /// Free-form time range
    pub time: &'static str,
    /// Free-form location text
    pub location: &'static str,
    /// Participants at app start
    pub participants: u32,
    /// Capacity
    pub max_participants: u32,
    /// Card image
    pub image: BundledImage,
}

/// The featured catalog.
pub const FEATURED_EVENTS: [FeaturedEventSpec; 5] = [
    FeaturedEventSpec {
        id: 1,
        title: "Shah Alam Lake Cleanup",
        description: "Join us for a community cleanup at Taman Tasik Shah Alam to remove plastic waste and protect our local water ecosystem.",
        days_ahead: 5,
        time: "8:00 AM - 12:00 PM",
        location: "Taman Tasik Shah Alam, Selangor",
        participants: 24,
        max_participants: 50,
        image: BundledImage::Lake,
    },
    FeaturedEventSpec {
        id: 2,
        title: "Klang River Protection",
        description: "Help clean up the Klang River and learn about the impact of marine debris on our local ecosystems. Organized by the Malaysian Nature Society.",
        days_ahead: 12,
        time: "9:00 AM - 2:00 PM",
        location: "Klang River, near Central Market, Kuala Lumpur",
        participants: 18,
        max_participants: 30,
        image: BundledImage::River,
    },
    FeaturedEventSpec {
        id: 3,
        title: "Port Klang Beach Cleanup",
        description: "Join marine conservationists to learn about Malaysia's coastal ecosystems and participate in a cleanup to protect our beaches.",
        days_ahead: 20,
        time: "7:00 AM - 1:00 PM",
        location: "Bagan Lalang Beach, Port Klang, Selangor",
        participants: 15,
        max_participants: 25,
        image: BundledImage::Beach,
    },
    FeaturedEventSpec {
        id: 4,
        title: "Mangrove Conservation Day",
        description: "Help protect Malaysia's vital mangrove ecosystems at Kuala Selangor Nature Park. Learn about the importance of mangroves for marine life.",
        days_ahead: 28,
        time: "8:30 AM - 3:00 PM",
        location: "Kuala Selangor Nature Park, Selangor",
        participants: 22,
        max_participants: 40,
        image: BundledImage::Mangrove,
    },
    FeaturedEventSpec {
        id: 5,
        title: "Cyberjaya Lake Cleanup",
        description: "Join tech professionals and environmentalists for a cleanup of Cyberjaya Lake. Learn about urban water conservation in Malaysia.",
        days_ahead: 35,
        time: "9:00 AM - 1:00 PM",
        location: "Cyberjaya Lake, Cyberjaya, Selangor",
        participants: 30,
        max_participants: 60,
        image: BundledImage::Lake,
    },
];

impl FeaturedEventSpec {
    /// Materialize the event with its date relative to `now`.
    pub fn to_event(&self, now: DateTime<Utc>) -> CleanupEvent {
        CleanupEvent {
            id: EventId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            date: now + Duration::days(self.days_ahead),
            time: self.time.to_string(),
            location: self.location.to_string(),
            participants: self.participants,
            max_participants: self.max_participants,
            image: ImageRef::Bundled(self.image),
        }
    }
}

/// Featured events dated relative to `now`.
pub fn featured_events(now: DateTime<Utc>) -> Vec<CleanupEvent> {
    FEATURED_EVENTS.iter().map(|spec| spec.to_event(now)).collect()
}
