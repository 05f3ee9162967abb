//! CLI argument definitions for archery.

use std::path::PathBuf;

use archery_core::Format;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "archery")]
#[command(about = "Archery league scoring and leaderboards", version)]
pub struct Args {
    /// Config file (TOML); defaults to ./archery.toml when present
    #[arg(long, value_name = "FILE", env = "ARCHERY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Scoring rule id (0-16), overrides the config file
    #[arg(long, value_name = "ID", env = "ARCHERY_SCORING_RULE", global = true)]
    pub scoring_rule: Option<u8>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a single score string
    Parse {
        /// Per-arrow score string, e.g. "XT9 8M7"
        score: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a tournament leaderboard
    Leaderboard {
        /// Tournament snapshot (JSON)
        snapshot: PathBuf,
        /// Exclude each archer's N worst events (config value when N is omitted)
        #[arg(long, value_name = "N", num_args = 0..=1)]
        drop_lowest: Option<Option<usize>>,
        /// Maximum number of archers shown
        #[arg(long)]
        limit: Option<usize>,
        /// Output format
        #[arg(short, long, default_value_t = Format::Table)]
        format: Format,
    },
    /// Show per-category standings for one event
    Event {
        /// Tournament snapshot (JSON)
        snapshot: PathBuf,
        /// Event id
        event_id: u32,
        /// Output format
        #[arg(short, long, default_value_t = Format::Table)]
        format: Format,
    },
    /// Show one archer's results
    Archer {
        /// Tournament snapshot (JSON)
        snapshot: PathBuf,
        /// Archer id
        archer_id: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how often each arrow value was shot
    Distribution {
        /// Tournament snapshot (JSON)
        snapshot: PathBuf,
        /// Only count this event
        #[arg(long, value_name = "ID")]
        event: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
