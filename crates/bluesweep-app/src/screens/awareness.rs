//! Pollution awareness: trivia dialog and infographic carousel

use serde::{Deserialize, Serialize};

use crate::content::{INFOGRAPHICS, TRIVIA_FACTS};
use crate::core::{Command, UpdateContext};

/// Pollution awareness screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwarenessState {
    /// Fact shown in the trivia dialog
    pub trivia_index: usize,
    /// Whether the trivia dialog is open
    pub trivia_open: bool,
    /// Carousel position
    pub infographic_index: usize,
}

/// Awareness screen actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwarenessAction {
    /// Open the trivia dialog
    ShowTrivia,
    /// Advance to the next fact, wrapping around
    NextTrivia,
    /// Close the trivia dialog
    CloseTrivia,
    /// Next carousel slide, wrapping around
    NextInfographic,
    /// Previous carousel slide, wrapping around
    PreviousInfographic,
    /// Jump to a slide; out-of-range indexes are ignored
    SelectInfographic(usize),
    /// Leave the screen
    Back,
}

impl AwarenessState {
    /// Fact at the current index.
    pub fn current_trivia(&self) -> &'static str {
        TRIVIA_FACTS[self.trivia_index % TRIVIA_FACTS.len()]
    }

    /// Apply an action.
    pub fn update(&mut self, action: AwarenessAction, _ctx: &UpdateContext) -> Vec<Command> {
        match action {
            AwarenessAction::ShowTrivia => self.trivia_open = true,
            AwarenessAction::NextTrivia => {
                self.trivia_index = (self.trivia_index + 1) % TRIVIA_FACTS.len();
            }
            AwarenessAction::CloseTrivia => self.trivia_open = false,
            AwarenessAction::NextInfographic => {
                self.infographic_index = (self.infographic_index + 1) % INFOGRAPHICS.len();
            }
            AwarenessAction::PreviousInfographic => {
                self.infographic_index =
                    (self.infographic_index + INFOGRAPHICS.len() - 1) % INFOGRAPHICS.len();
            }
            AwarenessAction::SelectInfographic(index) => {
                if index < INFOGRAPHICS.len() {
                    self.infographic_index = index;
                }
            }
            AwarenessAction::Back => return vec![Command::Back],
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluesweep_core::time::epoch;

    #[test]
    fn trivia_wraps_around() {
        let ctx = UpdateContext::new(epoch());
        let mut state = AwarenessState::default();
        state.update(AwarenessAction::ShowTrivia, &ctx);
        for _ in 0..TRIVIA_FACTS.len() {
            state.update(AwarenessAction::NextTrivia, &ctx);
        }
        assert_eq!(state.trivia_index, 0);
        assert_eq!(state.current_trivia(), TRIVIA_FACTS[0]);
        assert!(state.trivia_open);
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let ctx = UpdateContext::new(epoch());
        let mut state = AwarenessState::default();
        state.update(AwarenessAction::PreviousInfographic, &ctx);
        assert_eq!(state.infographic_index, 2);
        state.update(AwarenessAction::NextInfographic, &ctx);
        assert_eq!(state.infographic_index, 0);
        state.update(AwarenessAction::SelectInfographic(9), &ctx);
        assert_eq!(state.infographic_index, 0);
    }
}
