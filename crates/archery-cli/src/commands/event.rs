//! Event command for per-category standings.

use std::path::Path;

use anyhow::Result;
use archery_core::Config;
use archery_core::export::{Format, render_categories};
use archery_core::leaderboard::rank_categories;

use crate::cli_utils;

pub fn run(snapshot: &Path, config: &Config, event_id: u32, format: Format) -> Result<()> {
    let snapshot = cli_utils::load_snapshot(snapshot)?;
    let event = snapshot.event(event_id)?;
    let rows = snapshot.ingest_event(event_id, config.scoring_rule)?;

    eprintln!("{}: {} scores", event.name, rows.len());
    let standings = rank_categories(&event.category_infos(), &rows);
    println!("{}", render_categories(&standings, format)?);

    Ok(())
}
