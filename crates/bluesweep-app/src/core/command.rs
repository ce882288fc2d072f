//! # Commands
//!
//! Effect requests returned by screen reducers. Reducers never touch
//! storage, auth or devices; they describe what should happen and
//! [`AppCore`](super::AppCore) carries it out, feeding results back as
//! follow-up actions.

use bluesweep_core::{EventId, NewEvent, NewWasteReport, ReportId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::navigation::Screen;
use crate::toast::Toast;

/// Which auth request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthFlow {
    /// Sign in with email and password
    SignIn,
    /// Create an account
    SignUp,
    /// Password reset email
    PasswordReset,
    /// Verification email after sign-up
    EmailVerification,
}

/// Where an "add photo" request came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoSource {
    /// Take a new photo
    #[default]
    Camera,
    /// Pick an existing photo
    Gallery,
}

/// Which form a captured photo is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoTarget {
    /// The waste report form
    WasteReport,
    /// The create-event image picker
    EventImage,
}

/// Profile fields saved together from the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    /// Display name
    pub name: String,
    /// Handle, e.g. `@marina`
    pub username: String,
    /// Short bio
    pub bio: String,
    /// Free-text home location
    pub location: String,
}

/// An effect requested by a reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Show a toast
    Toast(Toast),
    /// Push a screen
    Navigate(Screen),
    /// Pop a screen
    Back,
    /// Replace navigation history
    ResetTo(Screen),

    /// Sign in with the auth provider
    SignIn {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },
    /// Create an account and sign it in
    SignUp {
        /// Account email
        email: String,
        /// Chosen password
        password: String,
    },
    /// Email the signed-in user a verification link
    SendEmailVerification,
    /// Email a password reset link
    SendPasswordReset {
        /// Address to send it to
        email: String,
    },
    /// End the session; the result comes back as `LogoutFinished`
    SignOut,

    /// Take a place at a community event
    RegisterEvent(EventId),
    /// Persist a new community event
    CreateEvent(NewEvent),
    /// Count one attended event on the profile
    RecordAttendance,

    /// Resolve the device location to an address
    RequestLocation,
    /// Get a photo URI from the photo provider
    CapturePhoto {
        /// Camera or gallery
        source: PhotoSource,
        /// Form the photo goes to
        target: PhotoTarget,
    },
    /// Persist a waste report
    SubmitReport(NewWasteReport),
    /// Remove a waste report
    DeleteReport(ReportId),

    /// Persist the edited profile fields
    SaveProfile(ProfileFields),
}

/// Ambient inputs every reducer may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateContext {
    /// Current time
    pub now: DateTime<Utc>,
    /// Email of the signed-in user
    pub user_email: Option<String>,
}

impl UpdateContext {
    /// Context at `now` with nobody signed in.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            user_email: None,
        }
    }

    /// Same context with `email` signed in.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    /// Calendar day of `now`.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}
