//! # BlueSweep Effects
//!
//! Handlers for the effect traits defined in `bluesweep-core`.
//!
//! - Storage: [`FilesystemStorageHandler`] (one JSON file per document) and
//!   [`MemoryStorageHandler`]
//! - Auth: [`LocalAuthHandler`], accounts kept in a storage document
//! - Location: [`SampleLocationProvider`], five canned Malaysian places
//! - Photo: [`SamplePhotoProvider`]
//! - Time: [`SystemClock`] and [`FixedClock`]
//!
//! Handlers are stateless apart from what they persist, so they can be
//! shared behind `Arc` by every store and by the app core.

#![forbid(unsafe_code)]

pub mod auth;
pub mod location;
pub mod photo;
pub mod storage;
pub mod time;

pub use auth::{LocalAuthHandler, AUTH_DOCUMENT_KEY, MIN_PASSWORD_LEN};
pub use location::{LocationMode, SampleLocationProvider, SAMPLE_LOCATIONS};
pub use photo::{capture_file_name, SamplePhotoProvider};
pub use storage::{FilesystemStorageHandler, MemoryStorageHandler};
pub use time::{FixedClock, SystemClock};
