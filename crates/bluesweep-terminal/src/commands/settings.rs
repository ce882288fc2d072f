//! Config file commands

use anyhow::{anyhow, Context, Result};
use bluesweep_app::AppConfig;
use clap::Subcommand;
use std::path::Path;

use crate::config::render_config;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the effective configuration to the config file
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(cmd: ConfigCommand, path: &Path, config: &AppConfig) -> Result<()> {
    match cmd {
        ConfigCommand::Show => print!("{}", render_config(config)?),
        ConfigCommand::Init { force } => {
            if !force && tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Err(anyhow!(
                    "{} already exists; pass --force to replace it",
                    path.display()
                ));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            tokio::fs::write(path, render_config(config)?)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote config");
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
