//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::leaderboard::{ArcherProfile, CategoryLeaderboard, LeaderboardEntry};
use crate::score::{ScoreBreakdown, ScoreDistribution, TieBreakEntry};

use super::{format_average, format_trend};

const NAME_WIDTH: usize = 24;
const BAR_WIDTH: usize = 40;

/// Format a leaderboard as a colored table
pub fn format_leaderboard_console(entries: &[LeaderboardEntry]) -> String {
    let mut output = String::new();

    let header = format!(
        "{:>4}  {:<width$}  {:<12}  {:>3}  {:>5}  {:>4}  {:>4}  {:>7}  {:>5}",
        "#",
        "ARCHER",
        "CATEGORY",
        "EVT",
        "TOTAL",
        "10s",
        "Xs",
        "AVG",
        "TREND",
        width = NAME_WIDTH
    );
    let border = "━".repeat(header.chars().count());

    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{}", border.dimmed());

    if entries.is_empty() {
        let _ = writeln!(output, "  {}", "No scores yet".dimmed());
    }

    for entry in entries {
        let _ = writeln!(
            output,
            "{}  {:<width$}  {:<12}  {:>3}  {}  {:>4}  {:>4}  {:>7}  {}",
            format_colored_rank(entry.rank),
            truncate(&entry.full_name, NAME_WIDTH),
            truncate(entry.latest_category.as_deref().unwrap_or("-"), 12),
            entry.events_shot,
            format!("{:>5}", entry.totals.total).bold(),
            entry.totals.tens,
            entry.totals.x_count,
            format_average(entry.average),
            format_colored_trend(entry.trend, 5),
            width = NAME_WIDTH
        );
        if !entry.dropped.is_empty() {
            let dropped: Vec<String> = entry
                .dropped
                .iter()
                .map(|b| format!("{} ({})", b.event_name, b.score.total))
                .collect();
            let _ = writeln!(
                output,
                "      {}",
                format!("dropped: {}", dropped.join(", ")).dimmed()
            );
        }
    }

    let _ = write!(output, "{}", border.dimmed());
    output
}

/// Format each category's standings as a titled table
pub fn format_categories_console(categories: &[CategoryLeaderboard]) -> String {
    let mut output = String::new();

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "{}", category.category_name.bold().underline());

        if category.scores.is_empty() {
            let _ = writeln!(output, "  {}", "No scores".dimmed());
            continue;
        }

        for score in &category.scores {
            let _ = writeln!(
                output,
                "{}  {:<width$}  {}  {:>3} 10s  {:>3} Xs  {}",
                score
                    .ranking
                    .map_or_else(|| format!("{:>4}", "-"), format_colored_rank),
                truncate(&score.full_name, NAME_WIDTH),
                format!("{:>5}", score.score.total).bold(),
                score.score.tens,
                score.score.x_count,
                score
                    .tie_break
                    .as_deref()
                    .map(format_tie_break)
                    .unwrap_or_default()
                    .dimmed(),
                width = NAME_WIDTH
            );
        }
    }

    output
}

/// Format a parsed score string
pub fn format_breakdown_console(breakdown: &ScoreBreakdown) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "  SCORE  : {} ({})",
        breakdown.total.bold(),
        breakdown.sanitized
    );
    let _ = writeln!(output, "  ARROWS : {}", breakdown.arrows);
    let _ = writeln!(
        output,
        "  10/X/9 : {}/{}/{}",
        breakdown.tens.cyan(),
        breakdown.x_count.yellow(),
        breakdown.nines
    );
    let _ = writeln!(output, "  RULE   : {}", breakdown.scoring_rule);
    if breakdown.tie_break.is_empty() {
        let _ = write!(output, "  TIE    : -");
    } else {
        let _ = write!(output, "  TIE    : {}", format_tie_break(&breakdown.tie_break));
    }
    output
}

/// Format an archer's totals and per-event history
pub fn format_profile_console(profile: &ArcherProfile) -> String {
    let mut output = String::new();
    let title = profile.archer.full_name();
    let border = "━".repeat(title.chars().count().max(50));

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  {}", title.bold());
    if let Some(team) = &profile.archer.team {
        let _ = writeln!(output, "  {}", team.dimmed());
    }
    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(
        output,
        "  TOTAL  : {} over {} events (avg {})",
        profile.totals.score.total.bold(),
        profile.totals.events_shot,
        format_average(profile.totals.average)
    );
    let _ = writeln!(
        output,
        "  10/X   : {}/{}",
        profile.totals.score.tens, profile.totals.score.x_count
    );

    for event in &profile.events {
        let ranking = event
            .ranking
            .map(|r| format!("#{}", r))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            output,
            "  {:<20} {:>5}  {:>4}  {}",
            truncate(&event.event_name, 20),
            event.total,
            ranking,
            event.category_name.as_deref().unwrap_or("").dimmed()
        );
    }

    let _ = write!(output, "{}", border.dimmed());
    output
}

/// Format an arrow value histogram with proportional bars
pub fn format_distribution_console(distribution: &ScoreDistribution) -> String {
    let mut output = String::new();

    for bin in &distribution.bins {
        let width = if distribution.max_count > 0 {
            (bin.count as usize * BAR_WIDTH).div_ceil(distribution.max_count as usize)
        } else {
            0
        };
        let _ = writeln!(
            output,
            "  {:>2} | {} {}",
            bin.score,
            "█".repeat(width).green(),
            bin.count
        );
    }

    let _ = write!(output, "  {} arrows", distribution.total_arrows);
    output
}

fn format_tie_break(entries: &[TieBreakEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}", e.label, e.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a rank with podium colors
fn format_colored_rank(rank: u32) -> String {
    let label = format!("{:>4}", rank);
    match rank {
        1 => label.truecolor(255, 200, 0).bold().to_string(),
        2 => label.truecolor(192, 192, 192).bold().to_string(),
        3 => label.truecolor(205, 127, 50).bold().to_string(),
        _ => label,
    }
}

fn format_colored_trend(trend: Option<i64>, width: usize) -> String {
    let label = format!("{:>width$}", format_trend(trend), width = width);
    match trend {
        Some(delta) if delta > 0 => label.green().to_string(),
        Some(delta) if delta < 0 => label.red().to_string(),
        _ => label.dimmed().to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
