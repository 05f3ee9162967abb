use serde::Serialize;

use crate::ranking::ScoreSummary;
use crate::score::{TieBreakEntry, coerce_tie_break};

use super::{ArcherInfo, ScoreRow, event_order_key};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTotals {
    #[serde(flatten)]
    pub score: ScoreSummary,
    pub events_shot: u32,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEvent {
    pub event_id: u32,
    pub event_name: String,
    pub tournament_id: u32,
    pub tournament_name: String,
    pub total: u32,
    pub ranking: Option<u32>,
    pub category_name: Option<String>,
    pub tie_break: Option<Vec<TieBreakEntry>>,
    pub raw_score: String,
    pub arrows: u32,
}

/// One archer's results across events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcherProfile {
    pub archer: ArcherInfo,
    pub totals: ProfileTotals,
    pub events: Vec<ProfileEvent>,
}

impl ArcherProfile {
    /// Collect `archer`'s rows (optionally only one tournament's) in event order
    pub fn build(archer: ArcherInfo, rows: &[ScoreRow], tournament_id: Option<u32>) -> Self {
        let mut own: Vec<&ScoreRow> = rows
            .iter()
            .filter(|row| row.archer.id == archer.id)
            .filter(|row| tournament_id.is_none_or(|id| row.tournament_id == id))
            .collect();
        own.sort_by_key(|row| event_order_key(row.event_display_order, row.event_id));

        let score: ScoreSummary = own.iter().map(|row| row.score).sum();
        let events_shot = own.len() as u32;
        let average = if events_shot > 0 {
            f64::from(score.total) / f64::from(events_shot)
        } else {
            0.0
        };

        let events = own
            .into_iter()
            .map(|row| ProfileEvent {
                event_id: row.event_id,
                event_name: row.event_name.clone(),
                tournament_id: row.tournament_id,
                tournament_name: row.tournament_name.clone(),
                total: row.score.total,
                ranking: row.ranking,
                category_name: row.category_name.clone(),
                tie_break: coerce_tie_break(row.tie_break.as_deref()),
                raw_score: row.raw_score.clone(),
                arrows: row.score.arrows,
            })
            .collect();

        Self {
            archer,
            totals: ProfileTotals {
                score,
                events_shot,
                average,
            },
            events,
        }
    }
}
