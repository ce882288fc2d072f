//! # Intents
//!
//! Everything a host can ask the app to do. Screen intents wrap that
//! screen's action type; the rest are app-wide.

use serde::{Deserialize, Serialize};

use crate::navigation::Screen;
use crate::screens::{
    AwarenessAction, EventsAction, HomeAction, LoginAction, ProfileAction, WasteAction,
};

/// A request from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Open a screen on top of the current one
    Navigate(Screen),
    /// Leave the current screen
    Back,
    /// Let time-driven state advance (tip carousel, banners)
    Tick,

    /// Login screen action
    Login(LoginAction),
    /// Home screen action
    Home(HomeAction),
    /// Events screen action
    Events(EventsAction),
    /// Waste tracking screen action
    Waste(WasteAction),
    /// Profile screen action
    Profile(ProfileAction),
    /// Awareness screen action
    Awareness(AwarenessAction),
}

impl Intent {
    /// Screen whose state the intent addresses, if any.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Self::Navigate(screen) => Some(*screen),
            Self::Back | Self::Tick => None,
            Self::Login(_) => Some(Screen::Login),
            Self::Home(_) => Some(Screen::Home),
            Self::Events(_) => Some(Screen::Events),
            Self::Waste(_) => Some(Screen::WasteTracking),
            Self::Profile(_) => Some(Screen::Profile),
            Self::Awareness(_) => Some(Screen::PollutionAwareness),
        }
    }
}
