use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ranking::{ScoreSummary, rank_by};
use crate::score::{TieBreakEntry, coerce_tie_break};

use super::ScoreRow;

/// A category (division) within one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub archer_id: u32,
    pub full_name: String,
    #[serde(flatten)]
    pub score: ScoreSummary,
    /// Placing stored on the score row
    pub ranking: Option<u32>,
    pub tie_break: Option<Vec<TieBreakEntry>>,
    pub raw_score: String,
}

/// Standings for one category of an event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLeaderboard {
    pub category_id: u32,
    pub category_name: String,
    /// Best first
    pub scores: Vec<CategoryScore>,
}

/// Set each row's `ranking` to its competition rank within its category.
///
/// Rows are expected to belong to a single event. Rows without a category
/// keep their ranking untouched.
pub fn assign_category_rankings(rows: &mut [ScoreRow]) {
    let mut by_category: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        match row.category_id {
            Some(category_id) => by_category.entry(category_id).or_default().push(index),
            None => warn!(
                "Archer {} has no category in event {}, leaving unranked",
                row.archer.id, row.event_id
            ),
        }
    }

    for indices in by_category.into_values() {
        let ranked = rank_by(indices, |&index| rows[index].score);
        for entry in ranked {
            rows[entry.item].ranking = Some(entry.rank);
        }
    }
}

/// Group one event's rows into per-category standings, best first.
///
/// Placings are read from each row's `ranking`, as set by
/// [`assign_category_rankings`]. Categories are listed by display order,
/// then id. Rows whose category is missing or unknown are left out.
pub fn rank_categories(categories: &[CategoryInfo], rows: &[ScoreRow]) -> Vec<CategoryLeaderboard> {
    let mut ordered: Vec<&CategoryInfo> = categories.iter().collect();
    ordered.sort_by_key(|c| (c.display_order.is_none(), c.display_order, c.id));

    let unassigned = rows
        .iter()
        .filter(|row| {
            row.category_id
                .is_none_or(|id| !categories.iter().any(|c| c.id == id))
        })
        .count();
    if unassigned > 0 {
        warn!("{} scores have no known category and were left out", unassigned);
    }

    ordered
        .into_iter()
        .map(|category| {
            let members: Vec<&ScoreRow> = rows
                .iter()
                .filter(|row| row.category_id == Some(category.id))
                .collect();

            let scores = rank_by(members, |row| row.score)
                .into_iter()
                .map(|ranked| CategoryScore {
                    archer_id: ranked.item.archer.id,
                    full_name: ranked.item.archer.full_name(),
                    score: ranked.item.score,
                    ranking: ranked.item.ranking,
                    tie_break: coerce_tie_break(ranked.item.tie_break.as_deref()),
                    raw_score: ranked.item.raw_score.clone(),
                })
                .collect();

            CategoryLeaderboard {
                category_id: category.id,
                category_name: category.name.clone(),
                scores,
            }
        })
        .collect()
}
