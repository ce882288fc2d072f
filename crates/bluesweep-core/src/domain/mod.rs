//! Domain records
//!
//! Plain data with the few invariants the app relies on (event capacity,
//! impact score bounds). No persistence or presentation logic.

mod auth;
mod events;
mod geo;
mod media;
mod profile;
mod reports;

pub use auth::{email_local_part, AuthUser};
pub use events::{CleanupEvent, NewEvent, Registration};
pub use geo::LatLng;
pub use media::{BundledImage, ImageRef};
pub use profile::{Achievement, Badge, ImpactStats, UserProfile, MAX_IMPACT_SCORE};
pub use reports::{NewWasteReport, WasteReport};
