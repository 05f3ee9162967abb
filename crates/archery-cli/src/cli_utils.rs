//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use archery_core::config::validate_scoring_rule;
use archery_core::{Config, TournamentSnapshot};
use tracing::{debug, warn};

const DEFAULT_CONFIG_FILE: &str = "archery.toml";

/// Load the config file and apply command-line overrides.
///
/// A missing file falls back to defaults; a malformed one is an error.
pub fn load_config(path: Option<&Path>, scoring_rule: Option<u8>) -> Result<Config> {
    let mut config = match path {
        Some(path) if path.exists() => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            Config::default()
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::load(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("Failed to load config from {}", DEFAULT_CONFIG_FILE))?,
        None => {
            debug!("No config file, using defaults");
            Config::default()
        }
    };

    if let Some(rule) = scoring_rule {
        validate_scoring_rule(rule)?;
        config.scoring_rule = rule;
    }

    Ok(config)
}

/// Load a tournament snapshot, naming the file on failure
pub fn load_snapshot(path: &Path) -> Result<TournamentSnapshot> {
    let snapshot = TournamentSnapshot::load(path)
        .with_context(|| format!("Failed to load snapshot from {}", path.display()))?;
    eprintln!(
        "Loaded '{}' ({} events, {} archers)",
        snapshot.tournament.name,
        snapshot.events.len(),
        snapshot.archers.len()
    );
    Ok(snapshot)
}
