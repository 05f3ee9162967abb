use std::collections::HashMap;

use tracing::debug;

use crate::ranking::{RankedEntry, ScoreSummary, rank_by};
use crate::score::coerce_tie_break;

use super::{ArcherInfo, BreakdownStats, EventBreakdown, LeaderboardEntry, ScoreRow, event_order_key};

/// Running state for one archer while folding events
#[derive(Debug)]
struct Accumulator {
    archer: ArcherInfo,
    totals: ScoreSummary,
    latest_category: Option<String>,
    breakdown: Vec<EventBreakdown>,
}

impl Accumulator {
    fn new(archer: &ArcherInfo) -> Self {
        Self {
            archer: archer.clone(),
            totals: ScoreSummary::default(),
            latest_category: None,
            breakdown: Vec::new(),
        }
    }

    fn push(&mut self, row: &ScoreRow) {
        self.totals += row.score;
        if row.category_name.is_some() {
            self.latest_category = row.category_name.clone();
        }

        let previous = self.breakdown.last();
        let delta_from_previous =
            previous.map(|p| i64::from(row.score.total) - i64::from(p.score.total));
        let ranking_delta = previous
            .and_then(|p| p.ranking)
            .zip(row.ranking)
            .map(|(before, now)| i64::from(before) - i64::from(now));

        self.breakdown.push(EventBreakdown {
            event_id: row.event_id,
            event_name: row.event_name.clone(),
            display_order: row.event_display_order,
            ranking: row.ranking,
            category_name: row.category_name.clone(),
            delta_from_previous,
            ranking_delta,
            tie_break: coerce_tie_break(row.tie_break.as_deref()),
            raw_score: row.raw_score.clone(),
            synced_at: row.synced_at,
            score: row.score,
        });
    }

    fn finish(self) -> LeaderboardEntry {
        let stats = BreakdownStats::collect(&self.breakdown);
        debug_assert_eq!(stats.totals, self.totals);

        let latest = self.breakdown.last();
        let trend = latest.and_then(|b| b.delta_from_previous);
        let latest_ranking = latest.and_then(|b| b.ranking);
        let latest_category = latest
            .and_then(|b| b.category_name.clone())
            .or(self.latest_category);

        LeaderboardEntry {
            archer_id: self.archer.id,
            full_name: self.archer.full_name(),
            condition_code: self.archer.condition_code,
            team: self.archer.team,
            totals: self.totals,
            events_shot: stats.events_shot,
            average: stats.average,
            best: stats.best,
            worst: stats.worst,
            trend,
            latest_ranking,
            latest_category,
            breakdown: self.breakdown,
            dropped: Vec::new(),
            rank: 0,
        }
    }
}

/// Build a tournament leaderboard from its per-event score rows.
///
/// Events are folded in display order (then event id), so each archer's
/// breakdown reads chronologically. The result is ranked on cumulative
/// totals and returned best-first.
pub fn aggregate_leaderboard(rows: &[ScoreRow]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&ScoreRow> = rows.iter().collect();
    ordered.sort_by_key(|row| event_order_key(row.event_display_order, row.event_id));

    let mut slots: HashMap<u32, usize> = HashMap::new();
    let mut accumulators: Vec<Accumulator> = Vec::new();

    for row in ordered {
        let slot = *slots.entry(row.archer.id).or_insert_with(|| {
            accumulators.push(Accumulator::new(&row.archer));
            accumulators.len() - 1
        });
        accumulators[slot].push(row);
    }

    debug!(
        "Aggregated {} score rows into {} archers",
        rows.len(),
        accumulators.len()
    );

    let entries: Vec<LeaderboardEntry> = accumulators.into_iter().map(Accumulator::finish).collect();
    rank_by(entries, |entry| entry.totals)
        .into_iter()
        .map(|RankedEntry { mut item, rank }| {
            item.rank = rank;
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::test_support::{archer, row, summary};

    #[test]
    fn test_trend_from_last_two_events() {
        let robin = archer(1, "Robin", "Hood");
        let rows = vec![
            row(&robin, 10, 1, summary(280, 5, 2)),
            row(&robin, 11, 2, summary(295, 8, 3)),
        ];

        let board = aggregate_leaderboard(&rows);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].trend, Some(15));
        assert_eq!(board[0].breakdown[0].delta_from_previous, None);
        assert_eq!(board[0].breakdown[1].delta_from_previous, Some(15));
    }

    #[test]
    fn test_single_event_has_no_trend() {
        let robin = archer(1, "Robin", "Hood");
        let board = aggregate_leaderboard(&[row(&robin, 10, 1, summary(280, 5, 2))]);
        assert_eq!(board[0].trend, None);
        assert_eq!(board[0].events_shot, 1);
        assert_eq!(board[0].best, 280);
        assert_eq!(board[0].worst, 280);
    }

    #[test]
    fn test_events_folded_in_display_order() {
        let robin = archer(1, "Robin", "Hood");
        // Rows arrive out of order; display order 1 must come first
        let rows = vec![
            row(&robin, 30, 3, summary(250, 0, 0)),
            row(&robin, 10, 1, summary(280, 0, 0)),
            row(&robin, 20, 2, summary(290, 0, 0)),
        ];

        let board = aggregate_leaderboard(&rows);
        let order: Vec<u32> = board[0].breakdown.iter().map(|b| b.event_id).collect();
        assert_eq!(order, vec![10, 20, 30]);
        assert_eq!(board[0].trend, Some(-40));
    }

    #[test]
    fn test_two_archers_ranked_by_totals() {
        let alice = archer(1, "Alice", "Archer");
        let bob = archer(2, "Bob", "Bowman");
        let rows = vec![
            row(&bob, 10, 1, summary(300, 10, 5)),
            row(&alice, 10, 1, summary(300, 10, 5)),
            row(&alice, 11, 2, summary(300, 10, 5)),
            row(&bob, 11, 2, summary(295, 9, 4)),
        ];

        let board = aggregate_leaderboard(&rows);
        assert_eq!(board[0].full_name, "Alice Archer");
        assert_eq!(board[0].totals.total, 600);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].full_name, "Bob Bowman");
        assert_eq!(board[1].totals.total, 595);
        assert_eq!(board[1].rank, 2);
    }

    #[test]
    fn test_derived_fields() {
        let robin = archer(1, "Robin", "Hood");
        let mut first = row(&robin, 10, 1, summary(280, 5, 2));
        first.ranking = Some(4);
        let mut second = row(&robin, 11, 2, summary(260, 3, 1));
        second.ranking = Some(6);
        second.category_name = None;
        let mut third = row(&robin, 12, 3, summary(290, 7, 4));
        third.ranking = Some(1);
        third.category_name = Some("Compound".to_string());

        let board = aggregate_leaderboard(&[first, second, third]);
        let entry = &board[0];
        assert_eq!(entry.totals.total, 830);
        assert_eq!(entry.totals.tens, 15);
        assert_eq!(entry.totals.x_count, 7);
        assert_eq!(entry.totals.arrows, 90);
        assert_eq!(entry.events_shot, 3);
        assert!((entry.average - 830.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(entry.best, 290);
        assert_eq!(entry.worst, 260);
        assert_eq!(entry.latest_ranking, Some(1));
        assert_eq!(entry.latest_category.as_deref(), Some("Compound"));
        assert_eq!(entry.breakdown[1].ranking_delta, Some(-2));
        assert_eq!(entry.breakdown[2].ranking_delta, Some(5));
    }

    #[test]
    fn test_latest_category_falls_back_to_last_seen() {
        let robin = archer(1, "Robin", "Hood");
        let first = row(&robin, 10, 1, summary(280, 0, 0));
        let mut second = row(&robin, 11, 2, summary(270, 0, 0));
        second.category_name = None;

        let board = aggregate_leaderboard(&[first, second]);
        assert_eq!(board[0].latest_category.as_deref(), Some("Recurve"));
    }

    #[test]
    fn test_ranking_delta_needs_both_rankings() {
        let robin = archer(1, "Robin", "Hood");
        let first = row(&robin, 10, 1, summary(280, 0, 0));
        let mut second = row(&robin, 11, 2, summary(270, 0, 0));
        second.ranking = Some(3);

        let board = aggregate_leaderboard(&[first, second]);
        assert_eq!(board[0].breakdown[1].ranking_delta, None);
    }

    #[test]
    fn test_stored_tie_break_is_coerced() {
        let robin = archer(1, "Robin", "Hood");
        let mut scored = row(&robin, 10, 1, summary(280, 0, 0));
        scored.tie_break = Some(r#"[{"label":"10s","value":4}]"#.to_string());

        let board = aggregate_leaderboard(&[scored]);
        let tie_break = board[0].breakdown[0].tie_break.as_ref().unwrap();
        assert_eq!(tie_break[0].label, "10s");
        assert_eq!(tie_break[0].value, 4);
    }

    #[test]
    fn test_empty_rows() {
        assert!(aggregate_leaderboard(&[]).is_empty());
    }
}
