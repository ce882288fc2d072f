//! # Core Application Module
//!
//! - [`AppCore`]: owns navigation, screen states, stores and effect handlers
//! - [`Intent`]: what a host asks for
//! - [`Command`]: what a screen reducer asks for
//! - [`IntentError`]: refused intents

mod app;
mod command;
mod error;
mod intent;

pub use app::{AppCore, AppEffects, StoreChange};
pub use command::{AuthFlow, Command, PhotoSource, PhotoTarget, ProfileFields, UpdateContext};
pub use error::IntentError;
pub use intent::Intent;
