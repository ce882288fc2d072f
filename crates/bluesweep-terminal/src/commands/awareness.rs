//! Pollution awareness

use anyhow::Result;
use bluesweep_app::content::{INFOGRAPHICS, POLLUTANTS, TRIVIA_FACTS};
use bluesweep_app::screens::AwarenessAction;
use bluesweep_app::{AppCore, Intent, Screen};
use clap::Subcommand;

use super::open_screen;

#[derive(Subcommand)]
pub enum AwarenessCommand {
    /// "Did you know?" facts
    Trivia {
        /// Start at this fact; wraps around
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Print every fact instead of one
        #[arg(long)]
        all: bool,
    },
    /// Infographic carousel
    Infographics,
    /// Common pollutants
    Pollutants,
}

pub async fn run(app: &mut AppCore, cmd: AwarenessCommand) -> Result<()> {
    open_screen(app, Screen::PollutionAwareness).await?;
    match cmd {
        AwarenessCommand::Trivia { start, all } => {
            awareness(app, AwarenessAction::ShowTrivia).await?;
            for _ in 0..start % TRIVIA_FACTS.len() {
                awareness(app, AwarenessAction::NextTrivia).await?;
            }
            let count = if all { TRIVIA_FACTS.len() } else { 1 };
            println!("Did you know?");
            for _ in 0..count {
                println!("  {}", app.awareness().current_trivia());
                awareness(app, AwarenessAction::NextTrivia).await?;
            }
            awareness(app, AwarenessAction::CloseTrivia).await?;
        }
        AwarenessCommand::Infographics => {
            for index in 0..INFOGRAPHICS.len() {
                awareness(app, AwarenessAction::SelectInfographic(index)).await?;
                let shown = &INFOGRAPHICS[app.awareness().infographic_index];
                println!("{}/{} {}", index + 1, INFOGRAPHICS.len(), shown.title);
                println!("    {}", shown.description);
            }
        }
        AwarenessCommand::Pollutants => {
            for pollutant in POLLUTANTS {
                println!("{}", pollutant.name);
                println!("    {}", pollutant.description);
            }
        }
    }
    Ok(())
}

async fn awareness(app: &mut AppCore, action: AwarenessAction) -> Result<()> {
    app.dispatch(Intent::Awareness(action)).await?;
    Ok(())
}
