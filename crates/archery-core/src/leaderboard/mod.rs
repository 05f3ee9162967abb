//! Leaderboards built from persisted per-event scores.
//!
//! - `aggregate_leaderboard` - fold event scores into per-archer totals
//! - `apply_drop_lowest` - recompute totals without each archer's worst events
//! - `rank_categories` / `assign_category_rankings` - per-event category standings
//! - `ArcherProfile` - one archer's scores across events

mod adjust;
mod aggregate;
mod category;
mod profile;

pub use adjust::*;
pub use aggregate::*;
pub use category::*;
pub use profile::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::{ScoreLike, ScoreSummary};
use crate::score::TieBreakEntry;

/// Identity of a competitor as reported by the results service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcherInfo {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub condition_code: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
}

impl ArcherInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// One archer's stored result for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRow {
    pub archer: ArcherInfo,
    pub tournament_id: u32,
    pub tournament_name: String,
    pub event_id: u32,
    pub event_name: String,
    pub event_display_order: Option<i32>,
    pub category_id: Option<u32>,
    pub category_name: Option<String>,
    /// Placing within the category, lower is better
    pub ranking: Option<u32>,
    #[serde(flatten)]
    pub score: ScoreSummary,
    pub raw_score: String,
    /// Tie-break tallies as stored (JSON)
    pub tie_break: Option<String>,
    pub synced_at: Option<DateTime<Utc>>,
}

impl ScoreLike for ScoreRow {
    fn score(&self) -> ScoreSummary {
        self.score
    }
}

/// Sort key placing events by display order, then id. Events without a
/// display order come last.
pub fn event_order_key(display_order: Option<i32>, event_id: u32) -> (bool, Option<i32>, u32) {
    (display_order.is_none(), display_order, event_id)
}

/// An archer's result for one event within an aggregated leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBreakdown {
    pub event_id: u32,
    pub event_name: String,
    pub display_order: Option<i32>,
    pub ranking: Option<u32>,
    pub category_name: Option<String>,
    /// Change in total against the archer's previous event
    pub delta_from_previous: Option<i64>,
    /// Previous ranking minus this ranking; positive means the archer moved up
    pub ranking_delta: Option<i64>,
    pub tie_break: Option<Vec<TieBreakEntry>>,
    pub raw_score: String,
    pub synced_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub score: ScoreSummary,
}

/// An archer's cumulative standing across a tournament's events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub archer_id: u32,
    pub full_name: String,
    pub condition_code: Option<String>,
    pub team: Option<String>,
    pub totals: ScoreSummary,
    pub events_shot: u32,
    pub average: f64,
    pub best: u32,
    pub worst: u32,
    pub trend: Option<i64>,
    pub latest_ranking: Option<u32>,
    pub latest_category: Option<String>,
    /// Counted events in display order
    pub breakdown: Vec<EventBreakdown>,
    /// Events excluded by a drop-lowest adjustment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<EventBreakdown>,
    /// Competition rank; 0 until ranked
    pub rank: u32,
}

impl ScoreLike for LeaderboardEntry {
    fn score(&self) -> ScoreSummary {
        self.totals
    }
}

/// Totals derived from a set of event breakdowns
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct BreakdownStats {
    pub totals: ScoreSummary,
    pub events_shot: u32,
    pub average: f64,
    pub best: u32,
    pub worst: u32,
}

impl BreakdownStats {
    pub(crate) fn collect<'a, I>(breakdown: I) -> Self
    where
        I: IntoIterator<Item = &'a EventBreakdown>,
    {
        let mut stats = Self::default();
        let mut worst: Option<u32> = None;

        for item in breakdown {
            stats.totals += item.score;
            stats.events_shot += 1;
            stats.best = stats.best.max(item.score.total);
            worst = Some(worst.map_or(item.score.total, |w| w.min(item.score.total)));
        }

        stats.worst = worst.unwrap_or(0);
        if stats.events_shot > 0 {
            stats.average = f64::from(stats.totals.total) / f64::from(stats.events_shot);
        }
        stats
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims() {
        let archer = ArcherInfo {
            first_name: "Robin".to_string(),
            last_name: String::new(),
            ..Default::default()
        };
        assert_eq!(archer.full_name(), "Robin");
    }

    #[test]
    fn test_event_order_key_puts_unordered_last() {
        let mut keys = vec![
            event_order_key(None, 1),
            event_order_key(Some(2), 3),
            event_order_key(Some(1), 9),
            event_order_key(Some(2), 2),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                event_order_key(Some(1), 9),
                event_order_key(Some(2), 2),
                event_order_key(Some(2), 3),
                event_order_key(None, 1),
            ]
        );
    }

    #[test]
    fn test_breakdown_stats_empty() {
        let stats = BreakdownStats::collect(&[]);
        assert_eq!(stats.events_shot, 0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.best, 0);
        assert_eq!(stats.worst, 0);
    }
}
