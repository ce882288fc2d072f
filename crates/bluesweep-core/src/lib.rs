//! # BlueSweep Core
//!
//! Foundation crate for the BlueSweep application core. It holds the plain
//! domain records, identifiers, the unified error type and the effect
//! interfaces that the rest of the workspace programs against.
//!
//! ## What lives here
//!
//! - Domain records: [`CleanupEvent`], [`WasteReport`], [`UserProfile`],
//!   [`Badge`], [`Achievement`], [`AuthUser`]
//! - Identifiers: [`EventId`], [`ReportId`]
//! - Effect traits: [`StorageEffects`], [`AuthEffects`], [`LocationEffects`],
//!   [`PhotoEffects`], [`TimeEffects`]
//!
//! ## What's NOT in this crate
//!
//! - Effect handlers (belong in `bluesweep-effects`)
//! - Persisted document layouts (belong in `bluesweep-store`)
//! - View state and navigation (belong in `bluesweep-app`)

#![forbid(unsafe_code)]

/// Domain records
pub mod domain;

/// Effect interfaces (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Record identifiers
pub mod identifiers;

/// Time conversion helpers
pub mod time;

pub use domain::{
    email_local_part, Achievement, AuthUser, Badge, BundledImage, CleanupEvent, ImageRef,
    ImpactStats, LatLng, NewEvent, NewWasteReport, Registration, UserProfile, WasteReport,
    MAX_IMPACT_SCORE,
};
pub use effects::{
    AuthEffects, AuthError, LocationEffects, PhotoEffects, SampleLocation, StorageEffects,
    StorageError, TimeEffects,
};
pub use errors::{BlueSweepError, Result};
pub use identifiers::{EventId, ReportId};
