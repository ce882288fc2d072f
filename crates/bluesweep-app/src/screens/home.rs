//! Home dashboard

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::content::ECO_TIPS;
use crate::core::{Command, UpdateContext};
use crate::navigation::Screen;

/// Seconds each eco tip stays on screen.
pub const TIP_ROTATION_SECS: i64 = 5;

/// Headline numbers on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Big number
    pub value: &'static str,
    /// Caption under it
    pub label: &'static str,
}

/// Dashboard stats in display order.
pub const STATS: [Stat; 2] = [
    Stat {
        value: "8M",
        label: "Tons of plastic in oceans yearly",
    },
    Stat {
        value: "700+",
        label: "Marine species affected",
    },
];

/// The event teaser card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventTeaser {
    /// Card title
    pub title: &'static str,
    /// Day and time text
    pub when: &'static str,
    /// Where it happens
    pub location: &'static str,
}

/// The teaser shown on the dashboard.
pub const TEASER: EventTeaser = EventTeaser {
    title: "Beach Cleanup Day",
    when: "Saturday, 10:00 AM - 1:00 PM",
    location: "Taman Tasik Shah Alam, Selangor",
};

/// Home dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeState {
    /// Tip currently shown
    pub tip_index: usize,
    /// When the current tip was first shown
    pub tip_shown_at: DateTime<Utc>,
}

/// Home screen actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeAction {
    /// Advance the tip carousel if its time is up
    Tick,
    /// Open the events screen
    OpenEvents,
    /// Open the profile screen
    OpenProfile,
    /// Open the awareness screen
    OpenPollutionAwareness,
    /// Open the waste tracking screen
    OpenWasteTracking,
    /// "Join Event" on the teaser card
    JoinTeaserEvent,
    /// "Learn More" on the tip card
    LearnMore,
}

impl HomeState {
    /// Dashboard showing the first tip from `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            tip_index: 0,
            tip_shown_at: now,
        }
    }

    /// Tip currently shown.
    pub fn current_tip(&self) -> &'static str {
        ECO_TIPS[self.tip_index % ECO_TIPS.len()]
    }

    /// Greeting line for the signed-in user.
    pub fn greeting(ctx: &UpdateContext) -> String {
        format!("Welcome, {}!", ctx.user_email.as_deref().unwrap_or_default())
    }

    /// Apply an action.
    pub fn update(&mut self, action: HomeAction, ctx: &UpdateContext) -> Vec<Command> {
        match action {
            HomeAction::Tick => {
                self.rotate_tips(ctx.now);
                Vec::new()
            }
            HomeAction::OpenEvents | HomeAction::JoinTeaserEvent => {
                vec![Command::Navigate(Screen::Events)]
            }
            HomeAction::OpenProfile => vec![Command::Navigate(Screen::Profile)],
            HomeAction::OpenPollutionAwareness | HomeAction::LearnMore => {
                vec![Command::Navigate(Screen::PollutionAwareness)]
            }
            HomeAction::OpenWasteTracking => vec![Command::Navigate(Screen::WasteTracking)],
        }
    }

    fn rotate_tips(&mut self, now: DateTime<Utc>) {
        let period = Duration::seconds(TIP_ROTATION_SECS);
        let elapsed = now - self.tip_shown_at;
        if elapsed < period {
            return;
        }
        let steps = elapsed.num_seconds() / TIP_ROTATION_SECS;
        let steps_usize = usize::try_from(steps).unwrap_or(0);
        self.tip_index = (self.tip_index + steps_usize % ECO_TIPS.len()) % ECO_TIPS.len();
        self.tip_shown_at += Duration::seconds(steps * TIP_ROTATION_SECS);
    }
}
