//! # Screens
//!
//! One view state per screen. Each state has an `update` function that
//! takes an action and returns [`Command`](crate::core::Command)s; nothing in
//! here performs I/O.

mod awareness;
mod create_event;
mod events;
mod home;
mod login;
mod map;
mod profile;
mod waste;

use chrono::{DateTime, Utc};

pub use awareness::{AwarenessAction, AwarenessState};
pub use create_event::{
    CreateEventAction, CreateEventForm, ImagePicker, LocationSearch, DEFAULT_DAYS_AHEAD,
    DEFAULT_END_TIME, DEFAULT_MAX_PARTICIPANTS, DEFAULT_START_TIME,
};
pub use events::{
    EventListing, EventRef, EventsAction, EventsState, CREATED_MESSAGE, FULL_MESSAGE,
    REGISTERED_MESSAGE,
};
pub use home::{EventTeaser, HomeAction, HomeState, Stat, STATS, TEASER, TIP_ROTATION_SECS};
pub use login::{LoginAction, LoginState, ResetPasswordDialog, MIN_PASSWORD_LEN};
pub use map::{MapAction, MapOutcome, PollutionMapState, PollutionMarker, PollutionType};
pub use profile::{ProfileAction, ProfileState, SettingsItem, SETTINGS};
pub use waste::{
    WasteAction, WasteState, WasteTab, PERMISSION_REQUIRED, SUBMITTED_MESSAGE,
    SUCCESS_BANNER_SECS,
};

/// Event card date, e.g. "Saturday, March 7, 2026".
pub fn format_event_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Report history date, e.g. "Mar 07, 2026".
pub fn format_report_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_formats() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap();
        assert_eq!(format_event_date(&date), "Saturday, March 7, 2026");
        assert_eq!(format_report_date(&date), "Mar 07, 2026");
    }
}
