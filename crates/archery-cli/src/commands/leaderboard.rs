//! Leaderboard command for tournament standings.

use std::path::Path;

use anyhow::Result;
use archery_core::Config;
use archery_core::export::{Format, render_leaderboard};
use archery_core::leaderboard::{aggregate_leaderboard, apply_drop_lowest};

use crate::cli_utils;

/// Print the tournament leaderboard, optionally without each archer's worst events
pub fn run(
    snapshot: &Path,
    config: &Config,
    drop_count: Option<usize>,
    limit: usize,
    format: Format,
) -> Result<()> {
    let snapshot = cli_utils::load_snapshot(snapshot)?;
    let rows = snapshot.ingest(config.scoring_rule)?;

    let mut entries = aggregate_leaderboard(&rows);
    if let Some(drop_count) = drop_count {
        eprintln!("Dropping each archer's lowest {} events", drop_count);
        entries = apply_drop_lowest(entries, drop_count);
    }

    if entries.len() > limit {
        eprintln!("Showing top {} of {} archers", limit, entries.len());
    }
    println!("{}", render_leaderboard(&entries, format, limit)?);

    Ok(())
}
