//! BlueSweep terminal
//!
//! Each invocation opens the app core on the configured data directory,
//! drives it through intents, prints the resulting toasts and views, and
//! exits. The signed-in user is persisted, so a session carries over
//! between invocations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use bluesweep_app::AppCore;
use commands::{
    auth::{self, AuthCommand},
    awareness::{self, AwarenessCommand},
    events::{self, EventsCommand},
    map::{self, MapCommand},
    profile::{self, ProfileCommand},
    reports::{self, ReportsCommand},
    settings::{self, ConfigCommand},
    status,
};

#[derive(Parser)]
#[command(name = "bluesweep")]
#[command(about = "BlueSweep - community cleanups and waste reporting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the data directory from the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up, sign in, sign out, reset password
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Show the signed-in user and the dashboard
    Status,

    /// Cleanup events
    #[command(subcommand)]
    Events(EventsCommand),

    /// Waste reports
    #[command(subcommand)]
    Reports(ReportsCommand),

    /// Profile, badges and achievements
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Pollution facts and infographics
    #[command(subcommand)]
    Awareness(AwarenessCommand),

    /// Map lookups and location picking
    #[command(subcommand)]
    Map(MapCommand),

    /// Show or write the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_config(&cli.config).await?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = config::expand_home(&data_dir);
    }

    // Config commands never touch the stores.
    if let Commands::Config(cmd) = cli.command {
        return settings::run(cmd, &cli.config, &config).await;
    }

    let mut app = AppCore::from_config(config).await?;
    let result = match cli.command {
        Commands::Auth(cmd) => auth::run(&mut app, cmd).await,
        Commands::Status => status::show(&mut app).await,
        Commands::Events(cmd) => events::run(&mut app, cmd).await,
        Commands::Reports(cmd) => reports::run(&mut app, cmd).await,
        Commands::Profile(cmd) => profile::run(&mut app, cmd).await,
        Commands::Awareness(cmd) => awareness::run(&mut app, cmd).await,
        Commands::Map(cmd) => map::run(&mut app, cmd).await,
        Commands::Config(_) => Ok(()),
    };

    commands::print_toasts(&mut app);
    result
}
