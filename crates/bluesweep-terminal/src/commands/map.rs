//! Map lookups

use anyhow::{anyhow, Result};
use bluesweep_app::geocode::coordinates_for;
use bluesweep_app::screens::{MapAction, PollutionType, WasteAction};
use bluesweep_app::{AppCore, Intent, Screen};
use bluesweep_core::LatLng;
use clap::Subcommand;

use super::open_screen;

#[derive(Subcommand)]
pub enum MapCommand {
    /// Where the map centres for a location
    Locate { location: String },
    /// Pick a report location by tapping the map
    Pick {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Marker types and colours
    Markers,
}

pub async fn run(app: &mut AppCore, cmd: MapCommand) -> Result<()> {
    match cmd {
        MapCommand::Locate { location } => {
            let position = coordinates_for(&location);
            println!("{:.4}, {:.4}", position.latitude, position.longitude);
        }
        MapCommand::Pick { lat, lng } => {
            open_screen(app, Screen::WasteTracking).await?;
            let current = app.waste().location.clone();
            waste(app, WasteAction::OpenMap(current)).await?;
            waste(app, WasteAction::Map(MapAction::Tap(LatLng::new(lat, lng)))).await?;
            if app.waste().map.is_some() {
                waste(app, WasteAction::CloseMap).await?;
                return Err(anyhow!("The map did not pick a location"));
            }
            println!("{}", app.waste().location);
        }
        MapCommand::Markers => {
            for kind in PollutionType::all() {
                println!("{:<9} {}", kind.label(), kind.colour());
            }
        }
    }
    Ok(())
}

async fn waste(app: &mut AppCore, action: WasteAction) -> Result<()> {
    app.dispatch(Intent::Waste(action)).await?;
    Ok(())
}
