use std::collections::HashSet;

use tracing::debug;

use crate::ranking::{RankedEntry, rank_by_then};

use super::{BreakdownStats, EventBreakdown, LeaderboardEntry};

/// Number of worst events excluded when no count is configured
pub const DEFAULT_DROP_COUNT: usize = 2;

/// Recompute a leaderboard without each archer's `drop_count` worst events.
///
/// A count of zero returns the entries untouched. Otherwise every entry is
/// adjusted and the whole set is re-ranked; entries with equal totals are
/// listed by full name.
///
/// Must be applied once, to freshly aggregated entries: adjusted entries
/// only keep their counted events, so a second pass would drop more.
pub fn apply_drop_lowest(entries: Vec<LeaderboardEntry>, drop_count: usize) -> Vec<LeaderboardEntry> {
    if drop_count == 0 {
        return entries;
    }

    let adjusted: Vec<LeaderboardEntry> = entries
        .into_iter()
        .map(|entry| adjust_entry(entry, drop_count))
        .collect();

    debug!(
        "Dropped lowest {} events for {} of {} archers",
        drop_count,
        adjusted.iter().filter(|e| !e.dropped.is_empty()).count(),
        adjusted.len()
    );

    rank_by_then(adjusted, |entry| entry.totals, |a, b| a.full_name.cmp(&b.full_name))
        .into_iter()
        .map(|RankedEntry { mut item, rank }| {
            item.rank = rank;
            item
        })
        .collect()
}

/// Exclude one entry's worst events and recompute its totals.
///
/// The entry's rank is cleared; callers re-rank the adjusted set. Entries
/// with no more than `drop_count` events keep their totals.
pub fn adjust_entry(mut entry: LeaderboardEntry, drop_count: usize) -> LeaderboardEntry {
    entry.rank = 0;
    if drop_count == 0 || entry.breakdown.len() <= drop_count {
        return entry;
    }

    let dropped_ids = select_dropped_events(&entry.breakdown, drop_count);
    let (kept, dropped): (Vec<EventBreakdown>, Vec<EventBreakdown>) = entry
        .breakdown
        .into_iter()
        .partition(|b| !dropped_ids.contains(&b.event_id));

    let stats = BreakdownStats::collect(&kept);
    entry.totals = stats.totals;
    entry.events_shot = stats.events_shot;
    entry.average = stats.average;
    entry.best = stats.best;
    entry.worst = stats.worst;
    entry.trend = None;
    entry.latest_ranking = None;
    entry.breakdown = kept;
    entry.dropped.extend(dropped);
    entry
}

/// Event ids of the `drop_count` weakest results: lowest total first, then
/// fewest tens, then fewest Xs. Earlier events go first among exact ties.
fn select_dropped_events(breakdown: &[EventBreakdown], drop_count: usize) -> HashSet<u32> {
    let mut by_score: Vec<&EventBreakdown> = breakdown.iter().collect();
    by_score.sort_by_key(|b| (b.score.total, b.score.tens, b.score.x_count));
    by_score
        .into_iter()
        .take(drop_count)
        .map(|b| b.event_id)
        .collect()
}
