//! Config file loading
//!
//! The file is an [`AppConfig`] in TOML. A missing file means defaults; a
//! leading `~` in `data_dir` is expanded to the home directory.

use anyhow::{Context, Result};
use bluesweep_app::AppConfig;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = ".bluesweep/config.toml";

pub async fn load_config(path: &Path) -> Result<AppConfig> {
    let mut config = match tokio::fs::read_to_string(path).await {
        Ok(text) => parse_config(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            AppConfig::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    config.data_dir = expand_home(&config.data_dir);
    tracing::debug!(data_dir = %config.data_dir.display(), "Loaded config");
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<AppConfig> {
    Ok(toml::from_str(text)?)
}

pub fn render_config(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Replace a leading `~` with the home directory, if there is one.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
