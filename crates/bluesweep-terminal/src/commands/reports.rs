//! Waste report commands

use anyhow::{anyhow, Result};
use bluesweep_app::screens::{WasteAction, WasteTab};
use bluesweep_app::{AppCore, Intent, Screen};
use bluesweep_core::ReportId;
use clap::Subcommand;

use super::{open_screen, PhotoArg};

#[derive(Subcommand)]
pub enum ReportsCommand {
    /// Submitted reports, newest first
    List,
    /// Report a waste sighting
    Submit {
        #[arg(long)]
        description: String,
        #[arg(long, required_unless_present = "here", conflicts_with = "here")]
        location: Option<String>,
        /// Use the current location
        #[arg(long)]
        here: bool,
        /// Attach a photo
        #[arg(long, value_enum)]
        photo: Option<PhotoArg>,
    },
    /// Delete a report by id
    Delete { id: u32 },
}

pub async fn run(app: &mut AppCore, cmd: ReportsCommand) -> Result<()> {
    open_screen(app, Screen::WasteTracking).await?;
    match cmd {
        ReportsCommand::List => {
            waste(app, WasteAction::SelectTab(WasteTab::History)).await?;
            list(app);
        }
        ReportsCommand::Submit {
            description,
            location,
            here,
            photo,
        } => {
            waste(app, WasteAction::SetDescription(description)).await?;
            match location {
                Some(location) if !here => waste(app, WasteAction::SetLocation(location)).await?,
                _ => waste(app, WasteAction::UseCurrentLocation).await?,
            }
            if let Some(photo) = photo {
                waste(app, WasteAction::OpenPhotoOptions).await?;
                waste(app, WasteAction::TakePhoto(photo.into())).await?;
            }
            waste(app, WasteAction::Submit).await?;

            if let Some(message) = app.waste().success_message() {
                println!("{message}");
                if let Some(report) = app.waste().reports.first() {
                    println!("  #{} at {}", report.id.value(), report.location);
                }
            }
        }
        ReportsCommand::Delete { id } => {
            let id = ReportId::new(id);
            if !app.waste().reports.iter().any(|r| r.id == id) {
                return Err(anyhow!("No report #{}", id.value()));
            }
            waste(app, WasteAction::DeleteReport(id)).await?;
            println!("Deleted report #{}", id.value());
        }
    }
    Ok(())
}

fn list(app: &AppCore) {
    let state = app.waste();
    println!("{}", state.tab.title());
    if state.reports.is_empty() {
        println!("No reports yet");
        return;
    }
    for (report, date) in state.history() {
        println!("#{:<4} {date}  {}", report.id.value(), report.location);
        println!("      {}", report.description);
        if let Some(uri) = &report.photo_uri {
            println!("      Photo: {uri}");
        }
    }
}

async fn waste(app: &mut AppCore, action: WasteAction) -> Result<()> {
    app.dispatch(Intent::Waste(action)).await?;
    Ok(())
}
