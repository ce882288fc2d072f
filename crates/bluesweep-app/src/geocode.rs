//! Place-name to coordinate lookup
//!
//! Not real geocoding: the first known place name contained in the text
//! (case-insensitive) wins, and anything unknown maps to Kuala Lumpur.

use bluesweep_core::LatLng;

const PLACES: [(&str, LatLng); 11] = [
    ("Kuala Lumpur", LatLng::new(3.139, 101.6869)),
    ("Shah Alam", LatLng::new(3.0733, 101.5185)),
    ("Klang", LatLng::new(3.0449, 101.4455)),
    ("Cyberjaya", LatLng::new(2.9188, 101.6520)),
    ("Putrajaya", LatLng::new(2.9264, 101.6964)),
    ("Penang", LatLng::new(5.4141, 100.3288)),
    ("Johor", LatLng::new(1.4927, 103.7414)),
    ("Malacca", LatLng::new(2.1896, 102.2501)),
    ("Ipoh", LatLng::new(4.5975, 101.0901)),
    ("Kuching", LatLng::new(1.5535, 110.3593)),
    ("Kota Kinabalu", LatLng::new(5.9804, 116.0735)),
];

/// Fallback position.
pub const DEFAULT_POSITION: LatLng = LatLng::new(3.139, 101.6869);

/// Map position for free-form location text.
pub fn coordinates_for(location: &str) -> LatLng {
    let haystack = location.to_lowercase();
    PLACES
        .iter()
        .find(|(name, _)| haystack.contains(&name.to_lowercase()))
        .map_or(DEFAULT_POSITION, |(_, position)| *position)
}

/// Location text picked by tapping the map at `latitude`.
pub fn location_for_latitude(latitude: f64) -> &'static str {
    if latitude > 5.0 {
        "Penang, Malaysia"
    } else if latitude > 4.0 {
        "Ipoh, Malaysia"
    } else if latitude > 3.0 {
        "Kuala Lumpur, Malaysia"
    } else if latitude > 2.0 {
        "Putrajaya, Malaysia"
    } else {
        "Johor, Malaysia"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_place_wins() {
        // "Klang River ... Kuala Lumpur" contains both; Kuala Lumpur is listed first.
        assert_eq!(
            coordinates_for("Klang River, near Central Market, Kuala Lumpur"),
            LatLng::new(3.139, 101.6869)
        );
        assert_eq!(
            coordinates_for("Bagan Lalang Beach, Port Klang, Selangor"),
            LatLng::new(3.0449, 101.4455)
        );
        assert_eq!(coordinates_for("kota kinabalu"), LatLng::new(5.9804, 116.0735));
    }

    #[test]
    fn unknown_place_defaults_to_kuala_lumpur() {
        assert_eq!(coordinates_for("Atlantis"), DEFAULT_POSITION);
        assert_eq!(coordinates_for(""), DEFAULT_POSITION);
    }

    #[test]
    fn latitude_bands() {
        assert_eq!(location_for_latitude(5.5), "Penang, Malaysia");
        assert_eq!(location_for_latitude(5.0), "Ipoh, Malaysia");
        assert_eq!(location_for_latitude(4.2), "Ipoh, Malaysia");
        assert_eq!(location_for_latitude(3.1), "Kuala Lumpur, Malaysia");
        assert_eq!(location_for_latitude(2.5), "Putrajaya, Malaysia");
        assert_eq!(location_for_latitude(1.4), "Johor, Malaysia");
    }
}
