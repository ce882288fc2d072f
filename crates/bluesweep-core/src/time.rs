//! Time conversion helpers
//!
//! Dates are persisted as epoch milliseconds. Anything that does not map to
//! a representable instant decodes to the Unix epoch.

use chrono::{DateTime, TimeZone, Utc};

/// The Unix epoch, used as the default for missing dates
pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Convert epoch milliseconds to a UTC instant
pub fn from_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).single().unwrap_or_else(epoch)
}

/// Convert a UTC instant to epoch milliseconds
pub fn to_millis(at: &DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let at = from_millis(1_700_000_000_123);
        assert_eq!(to_millis(&at), 1_700_000_000_123);
    }

    #[test]
    fn out_of_range_is_epoch() {
        assert_eq!(from_millis(i64::MAX), epoch());
    }
}
