//! Profile screen

use bluesweep_core::{email_local_part, Achievement, Badge, ImpactStats, UserProfile};
use bluesweep_store::StoredProfile;
use serde::{Deserialize, Serialize};

use crate::content::{achievements_for, badges_for};
use crate::core::{Command, ProfileFields, UpdateContext};
use crate::navigation::Screen;
use crate::toast::Toast;

/// Entry in the settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsItem {
    /// Row title
    pub title: &'static str,
    /// Row description
    pub subtitle: &'static str,
}

/// Settings rows in display order.
pub const SETTINGS: [SettingsItem; 4] = [
    SettingsItem {
        title: "Notifications",
        subtitle: "Manage your notification preferences",
    },
    SettingsItem {
        title: "Privacy",
        subtitle: "Control your privacy settings",
    },
    SettingsItem {
        title: "Help & Support",
        subtitle: "Get help with using BlueSweep",
    },
    SettingsItem {
        title: "About",
        subtitle: "Learn more about BlueSweep",
    },
];

/// Profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    /// Signed-in email
    pub email: String,
    /// Fields as stored, before fallbacks
    pub stored: StoredProfile,
    /// Profile with fallbacks and the derived score
    pub profile: UserProfile,
    /// Every badge with its unlock state
    pub badges: Vec<Badge>,
    /// Achievements earned so far
    pub achievements: Vec<Achievement>,
    /// Open edit dialog with its draft fields
    pub edit: Option<ProfileFields>,
    /// Save request in flight
    pub saving: bool,
}

/// Profile screen actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileAction {
    /// Leave the screen
    Back,
    /// Open the edit dialog
    OpenEdit,
    /// Edit the draft name
    SetName(String),
    /// Edit the draft handle
    SetUsername(String),
    /// Edit the draft bio
    SetBio(String),
    /// Edit the draft location
    SetLocation(String),
    /// Close the dialog without saving
    CancelEdit,
    /// Save the draft
    SaveEdit,
    /// The save finished
    SaveFinished {
        /// Whether the write succeeded
        ok: bool,
    },
    /// Sign out
    Logout,
    /// Sign-out finished
    LogoutFinished {
        /// Whether the provider ended the session
        ok: bool,
    },
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new("", &StoredProfile::default(), 0, 0)
    }
}

impl ProfileState {
    /// State for `email` from stored fields and activity counts.
    pub fn new(email: &str, stored: &StoredProfile, reports: usize, organized: usize) -> Self {
        let mut state = Self {
            email: String::new(),
            stored: stored.clone(),
            profile: UserProfile::new("", "", "", "", ImpactStats::default()),
            badges: Vec::new(),
            achievements: Vec::new(),
            edit: None,
            saving: false,
        };
        state.refresh(email, stored, reports, organized);
        state
    }

    /// Recompute everything shown from the latest store contents.
    pub fn refresh(&mut self, email: &str, stored: &StoredProfile, reports: usize, organized: usize) {
        let local = email_local_part(email);
        let name = if stored.name.trim().is_empty() {
            local.to_string()
        } else {
            stored.name.clone()
        };
        let username = if stored.username.trim().is_empty() {
            format!("@{local}")
        } else {
            stored.username.clone()
        };
        let stats = ImpactStats {
            events_attended: stored.events_attended,
            waste_reports: u32::try_from(reports).unwrap_or(u32::MAX),
            events_organized: u32::try_from(organized).unwrap_or(u32::MAX),
        };

        self.email = email.to_string();
        self.stored = stored.clone();
        self.profile = UserProfile::new(name, username, &stored.bio, &stored.location, stats);
        self.badges = badges_for(&stats);
        self.achievements = achievements_for(&stats);
    }

    /// Apply an action.
    pub fn update(&mut self, action: ProfileAction, _ctx: &UpdateContext) -> Vec<Command> {
        match action {
            ProfileAction::Back => return vec![Command::Back],
            ProfileAction::OpenEdit => {
                self.edit = Some(ProfileFields {
                    name: self.stored.name.clone(),
                    username: self.profile.username.clone(),
                    bio: self.stored.bio.clone(),
                    location: self.stored.location.clone(),
                });
            }
            ProfileAction::SetName(name) => self.edit_field(|f| f.name = name),
            ProfileAction::SetUsername(username) => self.edit_field(|f| f.username = username),
            ProfileAction::SetBio(bio) => self.edit_field(|f| f.bio = bio),
            ProfileAction::SetLocation(location) => self.edit_field(|f| f.location = location),
            ProfileAction::CancelEdit => self.edit = None,
            ProfileAction::SaveEdit => {
                if let (Some(fields), false) = (&self.edit, self.saving) {
                    self.saving = true;
                    return vec![Command::SaveProfile(fields.clone())];
                }
            }
            ProfileAction::SaveFinished { ok } => {
                self.saving = false;
                if ok {
                    self.edit = None;
                    return vec![Command::Toast(Toast::success("Profile updated successfully"))];
                }
            }
            ProfileAction::Logout => return vec![Command::SignOut],
            ProfileAction::LogoutFinished { ok: true } => {
                return vec![
                    Command::ResetTo(Screen::Login),
                    Command::Toast(Toast::info("Logged out successfully")),
                ];
            }
            ProfileAction::LogoutFinished { ok: false } => {
                return vec![Command::Toast(Toast::error(
                    "Logout failed. Please try again.",
                ))];
            }
        }
        Vec::new()
    }

    fn edit_field(&mut self, set: impl FnOnce(&mut ProfileFields)) {
        if let Some(fields) = &mut self.edit {
            set(fields);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluesweep_core::time::epoch;

    fn ctx() -> UpdateContext {
        UpdateContext::new(epoch())
    }

    #[test]
    fn blank_fields_fall_back_to_email() {
        let state = ProfileState::new("marina@bluesweep.my", &StoredProfile::default(), 0, 0);
        assert_eq!(state.profile.name, "marina");
        assert_eq!(state.profile.username, "@marina");
        assert_eq!(state.profile.bio, "Ocean enthusiast and marine conservationist");
        assert_eq!(state.profile.location, "Earth");
        assert_eq!(state.profile.impact_score, 0);
        assert!(state.achievements.is_empty());
    }

    #[test]
    fn counters_drive_score_and_badges() {
        let stored = StoredProfile {
            name: "Marina Tan".into(),
            username: "@seaglass".into(),
            events_attended: 10,
            ..StoredProfile::default()
        };
        let state = ProfileState::new("marina@bluesweep.my", &stored, 4, 3);
        assert_eq!(state.profile.name, "Marina Tan");
        assert_eq!(state.profile.username, "@seaglass");
        assert_eq!(state.profile.impact_score, 88);
        let titles: Vec<_> = state.achievements.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Ocean Guardian", "Community Leader"]);
    }

    #[test]
    fn edit_dialog_saves_all_fields() {
        let mut state = ProfileState::new("marina@bluesweep.my", &StoredProfile::default(), 0, 0);
        state.update(ProfileAction::OpenEdit, &ctx());
        assert_eq!(
            state.edit,
            Some(ProfileFields {
                name: String::new(),
                username: "@marina".into(),
                bio: "Ocean enthusiast and marine conservationist".into(),
                location: "Earth".into(),
            })
        );

        state.update(ProfileAction::SetName("Marina".into()), &ctx());
        state.update(ProfileAction::SetLocation("Penang".into()), &ctx());
        let commands = state.update(ProfileAction::SaveEdit, &ctx());
        let [Command::SaveProfile(fields)] = commands.as_slice() else {
            panic!("expected save, got {commands:?}");
        };
        assert_eq!(fields.name, "Marina");
        assert_eq!(fields.location, "Penang");

        let commands = state.update(ProfileAction::SaveFinished { ok: true }, &ctx());
        assert_eq!(
            commands,
            vec![Command::Toast(Toast::success("Profile updated successfully"))]
        );
        assert!(state.edit.is_none());
    }

    #[test]
    fn logout_resets_only_after_sign_out() {
        let mut state = ProfileState::default();
        assert_eq!(
            state.update(ProfileAction::Logout, &ctx()),
            vec![Command::SignOut]
        );
        assert_eq!(
            state.update(ProfileAction::LogoutFinished { ok: true }, &ctx()),
            vec![
                Command::ResetTo(Screen::Login),
                Command::Toast(Toast::info("Logged out successfully")),
            ]
        );
        assert_eq!(
            state.update(ProfileAction::LogoutFinished { ok: false }, &ctx()),
            vec![Command::Toast(Toast::error("Logout failed. Please try again."))]
        );
    }
}
