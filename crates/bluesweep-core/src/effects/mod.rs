//! Effect trait definitions
//!
//! Pure interfaces for every side effect the application core performs.
//! Handlers live in `bluesweep-effects`; the app core only ever sees these
//! traits, so tests can swap in deterministic handlers.
//!
//! - **Storage**: key-value documents (`StorageEffects`)
//! - **Auth**: email/password accounts (`AuthEffects`)
//! - **Location**: device location and reverse geocoding (`LocationEffects`)
//! - **Photo**: camera capture targets (`PhotoEffects`)
//! - **Time**: wall clock (`TimeEffects`)

pub mod auth;
pub mod location;
pub mod photo;
pub mod storage;
pub mod time;

pub use auth::{AuthEffects, AuthError};
pub use location::{LocationEffects, SampleLocation};
pub use photo::PhotoEffects;
pub use storage::{StorageEffects, StorageError};
pub use time::TimeEffects;
