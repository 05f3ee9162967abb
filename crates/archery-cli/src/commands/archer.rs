//! Archer command for one competitor's results.

use std::path::Path;

use anyhow::Result;
use archery_core::Config;
use archery_core::export::{format_json, format_profile_console};
use archery_core::leaderboard::ArcherProfile;

use crate::cli_utils;

pub fn run(snapshot: &Path, config: &Config, archer_id: u32, json: bool) -> Result<()> {
    let snapshot = cli_utils::load_snapshot(snapshot)?;
    let archer = snapshot.archer(archer_id)?.clone();
    let rows = snapshot.ingest(config.scoring_rule)?;

    let profile = ArcherProfile::build(archer, &rows, Some(snapshot.tournament.id));

    if json {
        println!("{}", format_json(&profile)?);
    } else {
        println!("{}", format_profile_console(&profile));
    }

    Ok(())
}
