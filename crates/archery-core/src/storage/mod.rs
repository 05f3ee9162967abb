//! Tournament snapshots.
//!
//! A snapshot is a JSON dump of one tournament as synced from the results
//! service: events with their categories, the archers, and every raw score
//! string. Ingesting it yields the per-event [`ScoreRow`]s the leaderboard
//! functions consume.
//!
//! [`ScoreRow`]: crate::leaderboard::ScoreRow

mod snapshot;

pub use snapshot::*;
