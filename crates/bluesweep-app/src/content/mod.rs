//! Built-in content: featured events, tips, awareness material, badges and
//! location suggestions.

mod awareness;
mod badges;
mod featured;
mod locations;

pub use awareness::{
    Infographic, Pollutant, ECO_TIPS, INFOGRAPHICS, POLLUTANTS, TRIVIA_FACTS,
};
pub use badges::{achievements_for, badges_for, BadgeSpec, BADGES};
pub use featured::{featured_events, FeaturedEventSpec, FEATURED_EVENTS};
pub use locations::{
    initial_suggestions, search_locations, LocationSuggestion, INITIAL_SUGGESTIONS,
    LOCATION_SUGGESTIONS,
};
