use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::ranking::{ScoreLike, ScoreSummary};

use super::arrow::{ArrowValue, is_ten, is_x};
use super::tie_break::{self, TieBreakEntry};

/// Numeric result of one archer's score string for one event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Score string without whitespace, uppercased
    pub sanitized: String,
    pub total: u32,
    pub arrows: u32,
    pub tens: u32,
    pub x_count: u32,
    pub nines: u32,
    pub scoring_rule: u8,
    /// Display-only tallies; never used for ranking
    pub tie_break: Vec<TieBreakEntry>,
}

impl ScoreLike for ScoreBreakdown {
    fn score(&self) -> ScoreSummary {
        ScoreSummary {
            total: self.total,
            tens: self.tens,
            x_count: self.x_count,
            nines: self.nines,
            arrows: self.arrows,
        }
    }
}

/// Decode a raw per-arrow score string.
///
/// Values and counts are read from the uppercased string. Tie-break tallies
/// are counted over the original-case string: ordinary classes match either
/// case, lowercase bonus codes only match as written. Unknown characters are
/// skipped.
pub fn parse_score(raw: Option<&str>, scoring_rule: u8) -> ScoreBreakdown {
    let stripped: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let sanitized = stripped.to_uppercase();

    let mut breakdown = ScoreBreakdown {
        scoring_rule,
        tie_break: tie_break::evaluate(scoring_rule, &stripped),
        ..Default::default()
    };

    for c in sanitized.chars() {
        let Some(arrow) = ArrowValue::from_char(c) else {
            trace!("Skipping unknown score character {:?}", c);
            continue;
        };

        breakdown.total += arrow.value;
        if arrow.counts_as_arrow {
            breakdown.arrows += 1;
        }
        if is_ten(c) {
            breakdown.tens += 1;
        }
        if is_x(c) {
            breakdown.x_count += 1;
        }
        if c == '9' {
            breakdown.nines += 1;
        }
    }

    breakdown.sanitized = sanitized;
    breakdown
}
