//! Command handlers. Each drives the app core through intents and prints
//! the view state it ends up in.

pub mod auth;
pub mod awareness;
pub mod events;
pub mod map;
pub mod profile;
pub mod reports;
pub mod settings;
pub mod status;

use bluesweep_app::{AppCore, Intent, Screen};
use clap::ValueEnum;

/// Print and clear pending toasts.
pub fn print_toasts(app: &mut AppCore) {
    for toast in app.drain_toasts() {
        println!("[{}] {toast}", toast.level.label());
    }
}

/// Move to `screen` unless it is already showing.
pub async fn open_screen(app: &mut AppCore, screen: Screen) -> anyhow::Result<()> {
    app.dispatch(Intent::Navigate(screen)).await?;
    Ok(())
}

/// Camera or gallery, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhotoArg {
    Camera,
    Gallery,
}

impl From<PhotoArg> for bluesweep_app::PhotoSource {
    fn from(arg: PhotoArg) -> Self {
        match arg {
            PhotoArg::Camera => Self::Camera,
            PhotoArg::Gallery => Self::Gallery,
        }
    }
}
