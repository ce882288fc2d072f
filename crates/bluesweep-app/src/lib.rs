//! # BlueSweep App
//!
//! Headless application core for BlueSweep. Hosts (the terminal binary,
//! tests, a future GUI) drive it through [`Intent`]s and read back plain
//! view-state structs; rendering is entirely the host's business.
//!
//! ## Layout
//!
//! - [`navigation`]: [`Screen`] and the [`Navigator`] stack
//! - [`screens`]: per-screen view state and reducers
//! - [`core`]: [`AppCore`], [`Intent`], [`Command`]
//! - [`content`]: static catalogs (tips, trivia, featured events, badges,
//!   location suggestions)
//! - [`geocode`]: location text to map position
//! - [`config`]: [`AppConfig`]
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut app = AppCore::from_config(AppConfig::default()).await?;
//! app.dispatch(Intent::Login(LoginAction::SetEmail("marina@bluesweep.my".into()))).await?;
//! app.dispatch(Intent::Login(LoginAction::SetPassword("seaturtle".into()))).await?;
//! app.dispatch(Intent::Login(LoginAction::SignIn)).await?;
//! for toast in app.drain_toasts() {
//!     println!("{toast}");
//! }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod content;
pub mod core;
pub mod geocode;
pub mod navigation;
pub mod screens;
pub mod toast;

pub use crate::config::AppConfig;
pub use crate::core::{
    AppCore, AppEffects, AuthFlow, Command, Intent, IntentError, PhotoSource, PhotoTarget,
    ProfileFields, StoreChange, UpdateContext,
};
pub use crate::navigation::{Navigator, Screen, UnknownScreen};
pub use crate::toast::{Toast, ToastLevel};
