//! Output formats for leaderboards and category standings.

mod console;

pub use console::*;

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::leaderboard::{CategoryLeaderboard, LeaderboardEntry};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    /// Colored console table
    #[default]
    Table,
    Tsv,
    Json,
}

pub fn format_leaderboard_tsv_header() -> String {
    [
        "rank", "archer", "category", "events", "total", "tens", "xs", "average", "best", "worst",
        "trend",
    ]
    .join("\t")
}

pub fn format_leaderboard_tsv_row(entry: &LeaderboardEntry) -> String {
    [
        entry.rank.to_string(),
        entry.full_name.clone(),
        entry.latest_category.clone().unwrap_or_default(),
        entry.events_shot.to_string(),
        entry.totals.total.to_string(),
        entry.totals.tens.to_string(),
        entry.totals.x_count.to_string(),
        format_average(entry.average),
        entry.best.to_string(),
        entry.worst.to_string(),
        format_trend(entry.trend),
    ]
    .join("\t")
}

pub fn format_leaderboard_tsv(entries: &[LeaderboardEntry]) -> String {
    let mut lines = vec![format_leaderboard_tsv_header()];
    lines.extend(entries.iter().map(format_leaderboard_tsv_row));
    lines.join("\n")
}

pub fn format_categories_tsv_header() -> String {
    ["category", "ranking", "archer", "total", "tens", "xs", "arrows", "score"].join("\t")
}

pub fn format_categories_tsv(categories: &[CategoryLeaderboard]) -> String {
    let mut lines = vec![format_categories_tsv_header()];
    for category in categories {
        for score in &category.scores {
            lines.push(
                [
                    category.category_name.clone(),
                    score.ranking.map(|r| r.to_string()).unwrap_or_default(),
                    score.full_name.clone(),
                    score.score.total.to_string(),
                    score.score.tens.to_string(),
                    score.score.x_count.to_string(),
                    score.score.arrows.to_string(),
                    score.raw_score.clone(),
                ]
                .join("\t"),
            );
        }
    }
    lines.join("\n")
}

/// Pretty-printed JSON for any exported value
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a leaderboard, showing at most `limit` entries in every format
pub fn render_leaderboard(
    entries: &[LeaderboardEntry],
    format: Format,
    limit: usize,
) -> Result<String> {
    let shown = &entries[..entries.len().min(limit)];
    match format {
        Format::Table => Ok(format_leaderboard_console(shown)),
        Format::Tsv => Ok(format_leaderboard_tsv(shown)),
        Format::Json => format_json(shown),
    }
}

pub fn render_categories(categories: &[CategoryLeaderboard], format: Format) -> Result<String> {
    match format {
        Format::Table => Ok(format_categories_console(categories)),
        Format::Tsv => Ok(format_categories_tsv(categories)),
        Format::Json => format_json(categories),
    }
}

/// Signed change in total, `-` when there is no previous event
pub fn format_trend(trend: Option<i64>) -> String {
    match trend {
        Some(delta) if delta > 0 => format!("+{}", delta),
        Some(delta) => delta.to_string(),
        None => "-".to_string(),
    }
}

pub fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::aggregate_leaderboard;
    use crate::leaderboard::test_support::{archer, row, summary};

    fn board() -> Vec<LeaderboardEntry> {
        let robin = archer(1, "Robin", "Hood");
        let will = archer(2, "Will", "Scarlet");
        aggregate_leaderboard(&[
            row(&robin, 10, 1, summary(280, 5, 2)),
            row(&robin, 11, 2, summary(295, 8, 3)),
            row(&will, 10, 1, summary(250, 1, 0)),
        ])
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("table".parse::<Format>().unwrap(), Format::Table);
        assert_eq!("TSV".parse::<Format>().unwrap(), Format::Tsv);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("csv".parse::<Format>().is_err());
        assert_eq!(Format::Tsv.to_string(), "tsv");
        let name: &'static str = Format::Json.into();
        assert_eq!(name, "json");
    }

    #[test]
    fn test_format_trend() {
        assert_eq!(format_trend(Some(15)), "+15");
        assert_eq!(format_trend(Some(-40)), "-40");
        assert_eq!(format_trend(Some(0)), "0");
        assert_eq!(format_trend(None), "-");
    }

    #[test]
    fn test_tsv_header_matches_row() {
        let board = board();
        let header_cols = format_leaderboard_tsv_header().split('\t').count();
        let row_cols = format_leaderboard_tsv_row(&board[0]).split('\t').count();
        assert_eq!(header_cols, row_cols);
    }

    #[test]
    fn test_leaderboard_tsv() {
        let tsv = format_leaderboard_tsv(&board());
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1\tRobin Hood\tRecurve\t2\t575\t13\t5\t287.50\t295\t280\t+15"
        );
        assert_eq!(lines[2], "2\tWill Scarlet\tRecurve\t1\t250\t1\t0\t250.00\t250\t250\t-");
    }

    #[test]
    fn test_render_respects_limit() {
        let board = board();
        let tsv = render_leaderboard(&board, Format::Tsv, 1).unwrap();
        assert_eq!(tsv.lines().count(), 2);

        let json = render_leaderboard(&board, Format::Json, 1).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["fullName"], "Robin Hood");
        assert_eq!(parsed[0]["totals"]["total"], 575);
    }

    #[test]
    fn test_render_empty() {
        let tsv = render_leaderboard(&[], Format::Tsv, 20).unwrap();
        assert_eq!(tsv, format_leaderboard_tsv_header());
    }
}
