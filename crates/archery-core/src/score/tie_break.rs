use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Result;

/// Highest scoring rule id known to the results service
pub const MAX_SCORING_RULE: u8 = 16;

/// One labelled tie-break tally, e.g. `{"label": "10s", "value": 12}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakEntry {
    pub label: String,
    pub value: u32,
}

/// A labelled character class counted over a score string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieBreakPattern {
    pub label: &'static str,
    pub chars: &'static str,
    /// Lowercase bonus codes only match as written
    pub case_sensitive: bool,
}

impl TieBreakPattern {
    const fn new(label: &'static str, chars: &'static str) -> Self {
        Self {
            label,
            chars,
            case_sensitive: false,
        }
    }

    const fn bonus(label: &'static str, chars: &'static str) -> Self {
        Self {
            label,
            chars,
            case_sensitive: true,
        }
    }

    /// Number of characters in `score` that belong to this class.
    ///
    /// Ordinary classes are uppercase and match either case.
    pub fn count_in(&self, score: &str) -> u32 {
        score
            .chars()
            .filter(|&c| {
                let c = if self.case_sensitive {
                    c
                } else {
                    c.to_ascii_uppercase()
                };
                self.chars.contains(c)
            })
            .count() as u32
    }
}

const TENS_NINES: &[TieBreakPattern] = &[
    TieBreakPattern::new("10s", "T"),
    TieBreakPattern::new("9s", "9"),
];
const TENS_XS: &[TieBreakPattern] = &[
    TieBreakPattern::new("10s", "TX"),
    TieBreakPattern::new("Xs", "X"),
];
const TENS: &[TieBreakPattern] = &[TieBreakPattern::new("10s", "T")];
const SIXES_FIVES: &[TieBreakPattern] = &[
    TieBreakPattern::new("6s", "6"),
    TieBreakPattern::new("5s", "5"),
];
const ELEVENS: &[TieBreakPattern] = &[TieBreakPattern::bonus("11s", "a")];
const TWELVES: &[TieBreakPattern] = &[TieBreakPattern::bonus("12s", "bd!")];
const W_XS: &[TieBreakPattern] = &[TieBreakPattern::new("Xs", "W")];
const ELEVENS_TENS: &[TieBreakPattern] = &[
    TieBreakPattern::bonus("11s", "a"),
    TieBreakPattern::new("10s", "T"),
];
const BONUS: &[TieBreakPattern] = &[TieBreakPattern::bonus("Bonus", "bd!")];
const XS_TENS_NINES: &[TieBreakPattern] = &[
    TieBreakPattern::new("Xs", "X"),
    TieBreakPattern::new("10s", "TX"),
    TieBreakPattern::new("9s", "9"),
];
const Z_XS: &[TieBreakPattern] = &[TieBreakPattern::new("Xs", "Z")];
const TENS_EIGHTS: &[TieBreakPattern] = &[
    TieBreakPattern::new("10s", "T"),
    TieBreakPattern::new("8s", "8"),
];

/// Tie-break tallies reported for a scoring rule.
///
/// Unknown rules report nothing.
pub fn tie_break_rule(scoring_rule: u8) -> &'static [TieBreakPattern] {
    match scoring_rule {
        0 => TENS_NINES,
        1 => TENS_XS,
        2 => TENS,
        3 => SIXES_FIVES,
        4 => ELEVENS,
        5 => TWELVES,
        6 | 12 => W_XS,
        9 | 16 => ELEVENS_TENS,
        11 => BONUS,
        13 => XS_TENS_NINES,
        14 => Z_XS,
        15 => TENS_EIGHTS,
        _ => &[],
    }
}

/// Evaluate a rule's tallies over a whitespace-free score string
pub fn evaluate(scoring_rule: u8, score: &str) -> Vec<TieBreakEntry> {
    tie_break_rule(scoring_rule)
        .iter()
        .map(|pattern| TieBreakEntry {
            label: pattern.label.to_string(),
            value: pattern.count_in(score),
        })
        .collect()
}

/// Serialize tallies for storage; rules without tallies store nothing.
pub fn serialize_tie_break(entries: &[TieBreakEntry]) -> Result<Option<String>> {
    if entries.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(entries)?))
}

/// Read stored tallies back, dropping anything malformed.
///
/// Returns `None` for missing or unparseable data and when no entry survives.
pub fn coerce_tie_break(stored: Option<&str>) -> Option<Vec<TieBreakEntry>> {
    let stored = stored.filter(|s| !s.is_empty())?;
    let parsed: JsonValue = serde_json::from_str(stored).ok()?;
    let items = parsed.as_array()?;

    let entries: Vec<TieBreakEntry> = items.iter().filter_map(coerce_entry).collect();
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

fn coerce_entry(item: &JsonValue) -> Option<TieBreakEntry> {
    let label = item.get("label")?.as_str()?;
    let value = match item.get("value")? {
        JsonValue::Number(n) => u32::try_from(n.as_u64()?).ok()?,
        JsonValue::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    Some(TieBreakEntry {
        label: label.to_string(),
        value,
    })
}
