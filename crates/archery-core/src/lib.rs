pub mod config;
pub mod error;
pub mod export;
pub mod leaderboard;
pub mod ranking;
pub mod score;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use export::Format;
pub use leaderboard::{
    ArcherInfo, ArcherProfile, CategoryLeaderboard, EventBreakdown, LeaderboardEntry, ScoreRow,
    aggregate_leaderboard, apply_drop_lowest, rank_categories,
};
pub use ranking::{RankedEntry, ScoreLike, ScoreSummary, rank, rank_by};
pub use score::{ScoreBreakdown, ScoreDistribution, TieBreakEntry, parse_score};
pub use storage::TournamentSnapshot;
