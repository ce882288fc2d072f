//! Profile commands

use anyhow::Result;
use bluesweep_app::screens::{ProfileAction, SETTINGS};
use bluesweep_app::{AppCore, Intent, Screen};
use clap::Subcommand;

use super::open_screen;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Profile, impact stats, badges and achievements
    Show,
    /// Change profile fields; omitted fields keep their value
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// List the settings entries
    Settings,
}

pub async fn run(app: &mut AppCore, cmd: ProfileCommand) -> Result<()> {
    open_screen(app, Screen::Profile).await?;
    match cmd {
        ProfileCommand::Show => show(app),
        ProfileCommand::Edit {
            name,
            username,
            bio,
            location,
        } => {
            profile(app, ProfileAction::OpenEdit).await?;
            let edits = [
                name.map(ProfileAction::SetName),
                username.map(ProfileAction::SetUsername),
                bio.map(ProfileAction::SetBio),
                location.map(ProfileAction::SetLocation),
            ];
            for action in edits.into_iter().flatten() {
                profile(app, action).await?;
            }
            profile(app, ProfileAction::SaveEdit).await?;
            if app.profile().edit.is_some() {
                profile(app, ProfileAction::CancelEdit).await?;
            } else {
                show(app);
            }
        }
        ProfileCommand::Settings => {
            for item in SETTINGS {
                println!("{:<16} {}", item.title, item.subtitle);
            }
        }
    }
    Ok(())
}

fn show(app: &AppCore) {
    let state = app.profile();
    let profile = &state.profile;
    println!("{} {}", profile.name, profile.username);
    println!("{}", state.email);
    println!("{}", profile.bio);
    println!("{}", profile.location);
    println!();
    println!("Impact score: {}", profile.impact_label());
    println!("  Events attended:  {}", profile.events_attended);
    println!("  Waste reports:    {}", profile.waste_reports);
    println!("  Events organized: {}", profile.events_organized);
    println!();
    println!("Badges");
    for badge in &state.badges {
        let mark = if badge.unlocked { "x" } else { " " };
        println!("  [{mark}] {} - {}", badge.name, badge.description);
    }
    if !state.achievements.is_empty() {
        println!();
        println!("Achievements");
        for achievement in &state.achievements {
            println!("  {} - {}", achievement.title, achievement.description);
        }
    }
}

async fn profile(app: &mut AppCore, action: ProfileAction) -> Result<()> {
    app.dispatch(Intent::Profile(action)).await?;
    Ok(())
}
