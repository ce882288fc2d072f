use serde::{Deserialize, Serialize};

/// A place offered by the location search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// Place name, used as the event location
    pub name: String,
    /// Secondary line under the name
    pub description: Option<String>,
}

impl LocationSuggestion {
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(query))
    }
}

const fn place(name: &'static str, description: &'static str) -> (&'static str, &'static str) {
    (name, description)
}

fn suggestion((name, description): (&str, &str)) -> LocationSuggestion {
    LocationSuggestion {
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

/// Number of suggestions shown before the user types.
pub const INITIAL_SUGGESTIONS: usize = 5;

/// Known places: name and description.
pub const LOCATION_SUGGESTIONS: [(&str, &str); 18] = [
    place("Kuala Lumpur City Centre, Kuala Lumpur", "City center with KLCC and Petronas Towers"),
    place("Batu Caves, Selangor", "Hindu temple and cave site"),
    place("Penang Island, Penang", "Island known for food and culture"),
    place("Langkawi, Kedah", "Archipelago with beaches and rainforests"),
    place("Malacca City, Malacca", "Historic colonial city"),
    place("Kota Kinabalu, Sabah", "Coastal city with Mount Kinabalu nearby"),
    place("Kuching, Sarawak", "Capital city of Sarawak"),
    place("Cameron Highlands, Pahang", "Hill station with tea plantations"),
    place("Johor Bahru, Johor", "Southern city near Singapore"),
    place("Ipoh, Perak", "City known for food and colonial architecture"),
    place("Putrajaya", "Federal administrative center"),
    place("Port Dickson, Negeri Sembilan", "Coastal town with beaches"),
    place("Kuala Selangor, Selangor", "Coastal town with fireflies"),
    place("Taman Tasik Shah Alam, Selangor", "Large lake and park"),
    place("Cyberjaya, Selangor", "Tech hub city"),
    place("Klang River, Kuala Lumpur", "River flowing through KL"),
    place("Bagan Lalang Beach, Selangor", "Beach area in Sepang"),
    place("Kuala Selangor Nature Park, Selangor", "Mangrove forest reserve"),
];

/// Suggestions whose name or description contains `query`, ignoring case.
/// A blank query matches nothing.
pub fn search_locations(query: &str) -> Vec<LocationSuggestion> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    LOCATION_SUGGESTIONS
        .iter()
        .copied()
        .map(suggestion)
        .filter(|s| s.matches(&query))
        .collect()
}

/// What the search shows before anything is typed.
pub fn initial_suggestions() -> Vec<LocationSuggestion> {
    LOCATION_SUGGESTIONS
        .iter()
        .copied()
        .take(INITIAL_SUGGESTIONS)
        .map(suggestion)
        .collect()
}
