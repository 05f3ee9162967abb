//! Distribution command for arrow value histograms.

use std::path::Path;

use anyhow::Result;
use archery_core::export::{format_distribution_console, format_json};
use archery_core::score::ScoreDistribution;

use crate::cli_utils;

/// Histogram of one event's arrows, or the whole tournament's
pub fn run(snapshot: &Path, event_id: Option<u32>, json: bool) -> Result<()> {
    let snapshot = cli_utils::load_snapshot(snapshot)?;
    let raw_scores = snapshot.raw_scores(event_id)?;
    let distribution = ScoreDistribution::from_raw_scores(raw_scores.into_iter().map(Some));

    if json {
        println!("{}", format_json(&distribution)?);
    } else {
        println!("{}", format_distribution_console(&distribution));
    }

    Ok(())
}
