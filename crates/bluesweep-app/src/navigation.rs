//! # Screens and Navigation
//!
//! The app shows exactly one [`Screen`] at a time. [`Navigator`] keeps an
//! explicit history stack so "back" returns to wherever the user came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Sign in / sign up
    Login,
    /// Dashboard
    Home,
    /// Cleanup event listings
    Events,
    /// User profile and badges
    Profile,
    /// Pollution facts and infographics
    PollutionAwareness,
    /// Waste reporting and history
    WasteTracking,
}

impl Screen {
    /// Every screen, in tab order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Login,
            Self::Home,
            Self::Events,
            Self::Profile,
            Self::PollutionAwareness,
            Self::WasteTracking,
        ]
    }

    /// Stable string tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::Events => "events",
            Self::Profile => "profile",
            Self::PollutionAwareness => "pollution",
            Self::WasteTracking => "waste_tracking",
        }
    }

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "BlueSweep",
            Self::Home => "Home",
            Self::Events => "Local Cleanup Events",
            Self::Profile => "Profile",
            Self::PollutionAwareness => "Pollution Awareness",
            Self::WasteTracking => "Waste Tracking",
        }
    }

    /// Whether the screen needs a signed-in user.
    pub fn requires_auth(self) -> bool {
        self != Self::Login
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unknown screen tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen '{0}'")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|screen| screen.tag() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

/// Navigation history. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    /// History holding only `root`.
    pub fn new(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    /// Screen on top of the history.
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Login)
    }

    /// Push `screen` unless it is already on top.
    pub fn navigate(&mut self, screen: Screen) {
        if self.current() != screen {
            self.stack.push(screen);
        }
    }

    /// Pop one screen. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole history with `screen`.
    pub fn reset(&mut self, screen: Screen) {
        self.stack.clear();
        self.stack.push(screen);
    }

    /// Whether `back` would do anything.
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Number of screens in the history.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// History, root first.
    pub fn history(&self) -> &[Screen] {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for screen in Screen::all() {
            assert_eq!(screen.tag().parse::<Screen>().unwrap(), *screen);
        }
        assert!("settings".parse::<Screen>().is_err());
    }

    #[test]
    fn back_returns_to_previous_screen() {
        let mut nav = Navigator::new(Screen::Home);
        nav.navigate(Screen::Events);
        nav.navigate(Screen::Events);
        assert_eq!(nav.depth(), 2);

        nav.navigate(Screen::Profile);
        assert!(nav.back());
        assert_eq!(nav.current(), Screen::Events);
        assert!(nav.back());
        assert_eq!(nav.current(), Screen::Home);
        assert!(!nav.back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn reset_clears_history() {
        let mut nav = Navigator::new(Screen::Home);
        nav.navigate(Screen::Profile);
        nav.reset(Screen::Login);
        assert_eq!(nav.history(), &[Screen::Login]);
        assert!(!nav.can_go_back());
    }
}
