//! Score string decoding.
//!
//! This module turns the results service's per-arrow score strings into
//! numbers:
//! - `ArrowValue` - the fixed character table
//! - `parse_score` / `ScoreBreakdown` - totals and tallies for one string
//! - `tie_break` - per-rule tie-break tallies and their stored form
//! - `ScoreDistribution` - arrow value histogram over many strings

mod arrow;
mod distribution;
mod parser;
pub mod tie_break;

pub use arrow::*;
pub use distribution::*;
pub use parser::*;
pub use tie_break::{MAX_SCORING_RULE, TieBreakEntry, coerce_tie_break, serialize_tie_break};
