//! # BlueSweep Store
//!
//! Flat key-value record stores. Each store owns one preference document
//! (a JSON object of scalar values) addressed by a fixed storage key, and
//! lays its records out as one key per field per record id:
//!
//! | Store | Document | Counter | Field keys |
//! |---|---|---|---|
//! | [`EventDataStore`] | `custom_events` | `event_count` | `event_{id}_{field}` |
//! | [`WasteReportStore`] | `waste_reports` | `report_count` | `report_{id}_{field}` |
//! | [`UserDataStore`] | `user_profile` | | `user_{field}` |
//!
//! Ids come from the counter and are never reused. Reads are lenient: a
//! missing or mistyped field decodes to its default, and a slot without an
//! `_id` key is skipped. Every store publishes full-list snapshots that can
//! be read directly or followed as a stream.

#![forbid(unsafe_code)]

mod document;
mod error;
mod events;
mod preferences;
mod reports;
mod user;

pub use document::{PreferencesDocument, SnapshotStream};
pub use error::StoreError;
pub use events::{EventDataStore, EVENTS_DOCUMENT_KEY};
pub use preferences::{PrefKey, PrefType, PrefValue, Preferences};
pub use reports::{WasteReportStore, REPORTS_DOCUMENT_KEY};
pub use user::{StoredProfile, UserDataStore, DEFAULT_BIO, DEFAULT_LOCATION, PROFILE_DOCUMENT_KEY};
