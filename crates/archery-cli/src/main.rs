mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise warn, or info with --verbose
    let default_filter = if args.verbose {
        "archery=info,archery_core=info"
    } else {
        "archery=warn,archery_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref(), args.scoring_rule)?;

    match args.command {
        Command::Parse { score, json } => commands::parse::run(&score, &config, json),
        Command::Leaderboard {
            snapshot,
            drop_lowest,
            limit,
            format,
        } => {
            // `--drop-lowest` alone uses the configured count
            let drop_count =
                drop_lowest.map(|count| count.unwrap_or(config.leaderboard.drop_lowest));
            let limit = limit.unwrap_or(config.leaderboard.limit);
            commands::leaderboard::run(&snapshot, &config, drop_count, limit, format)
        }
        Command::Event {
            snapshot,
            event_id,
            format,
        } => commands::event::run(&snapshot, &config, event_id, format),
        Command::Archer {
            snapshot,
            archer_id,
            json,
        } => commands::archer::run(&snapshot, &config, archer_id, json),
        Command::Distribution {
            snapshot,
            event,
            json,
        } => commands::distribution::run(&snapshot, event, json),
    }
}
