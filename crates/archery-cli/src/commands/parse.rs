//! Parse command for decoding a single score string.

use anyhow::Result;
use archery_core::Config;
use archery_core::export::{format_breakdown_console, format_json};
use archery_core::score::parse_score;

pub fn run(score: &str, config: &Config, json: bool) -> Result<()> {
    let breakdown = parse_score(Some(score), config.scoring_rule);

    if json {
        println!("{}", format_json(&breakdown)?);
    } else {
        println!("{}", format_breakdown_console(&breakdown));
    }

    Ok(())
}
