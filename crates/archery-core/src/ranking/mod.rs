//! Competition ranking over archery score totals.
//!
//! Every ranked thing (a single event score, an archer's cumulative totals)
//! is reduced to a [`ScoreSummary`] and ordered by total, then tens, Xs,
//! nines and arrow count, all descending. Equal summaries share a rank and
//! the next distinct summary takes its 1-based position ("1, 1, 3, 4").

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// The five numeric fields used to compare scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub total: u32,
    pub tens: u32,
    pub x_count: u32,
    pub nines: u32,
    pub arrows: u32,
}

impl ScoreSummary {
    /// Order two summaries best-first.
    ///
    /// `Ordering::Less` means `self` ranks ahead of `other`.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .total
            .cmp(&self.total)
            .then_with(|| other.tens.cmp(&self.tens))
            .then_with(|| other.x_count.cmp(&self.x_count))
            .then_with(|| other.nines.cmp(&self.nines))
            .then_with(|| other.arrows.cmp(&self.arrows))
    }
}

impl AddAssign for ScoreSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.tens += rhs.tens;
        self.x_count += rhs.x_count;
        self.nines += rhs.nines;
        self.arrows += rhs.arrows;
    }
}

impl Sum for ScoreSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, score| {
            acc += score;
            acc
        })
    }
}

/// Anything that can be placed on a leaderboard
pub trait ScoreLike {
    fn score(&self) -> ScoreSummary;
}

impl ScoreLike for ScoreSummary {
    fn score(&self) -> ScoreSummary {
        *self
    }
}

/// An item paired with its competition rank (1-based)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<T> {
    pub item: T,
    pub rank: u32,
}

/// Rank items by their own score.
pub fn rank<T: ScoreLike>(entries: Vec<T>) -> Vec<RankedEntry<T>> {
    rank_by(entries, T::score)
}

/// Rank items using `score_of` to extract the comparable summary.
///
/// Sorting is stable: entries with identical summaries keep their input order.
pub fn rank_by<T, F>(entries: Vec<T>, score_of: F) -> Vec<RankedEntry<T>>
where
    F: Fn(&T) -> ScoreSummary,
{
    rank_by_then(entries, score_of, |_, _| Ordering::Equal)
}

/// Like [`rank_by`], with `then` ordering entries whose summaries are equal.
///
/// `then` only affects the order of the output; tied summaries still share
/// one rank.
pub fn rank_by_then<T, F, G>(mut entries: Vec<T>, score_of: F, then: G) -> Vec<RankedEntry<T>>
where
    F: Fn(&T) -> ScoreSummary,
    G: Fn(&T, &T) -> Ordering,
{
    entries.sort_by(|a, b| {
        score_of(a)
            .ranking_cmp(&score_of(b))
            .then_with(|| then(a, b))
    });

    let mut ranked = Vec::with_capacity(entries.len());
    let mut previous: Option<ScoreSummary> = None;
    let mut current_rank = 0;

    for (position, item) in entries.into_iter().enumerate() {
        let score = score_of(&item);
        if previous != Some(score) {
            current_rank = position as u32 + 1;
            previous = Some(score);
        }
        ranked.push(RankedEntry {
            item,
            rank: current_rank,
        });
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(total: u32) -> ScoreSummary {
        ScoreSummary {
            total,
            ..Default::default()
        }
    }

    fn ranks<T>(ranked: &[RankedEntry<T>]) -> Vec<u32> {
        ranked.iter().map(|r| r.rank).collect()
    }

    #[test]
    fn test_ties_share_rank_and_leave_gap() {
        let ranked = rank(vec![total(300), total(290), total(300)]);
        assert_eq!(ranks(&ranked), vec![1, 1, 3]);
        assert_eq!(ranked[2].item.total, 290);
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank(Vec::<ScoreSummary>::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_competition_ranking_1224() {
        let ranked = rank(vec![total(310), total(300), total(300), total(280)]);
        assert_eq!(ranks(&ranked), vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_key_priority() {
        let more_tens = ScoreSummary {
            total: 300,
            tens: 12,
            x_count: 0,
            nines: 0,
            arrows: 30,
        };
        let more_xs = ScoreSummary {
            total: 300,
            tens: 11,
            x_count: 9,
            nines: 9,
            arrows: 30,
        };
        let more_nines = ScoreSummary {
            total: 300,
            tens: 11,
            x_count: 9,
            nines: 10,
            arrows: 30,
        };
        let more_arrows = ScoreSummary {
            total: 300,
            tens: 11,
            x_count: 9,
            nines: 10,
            arrows: 31,
        };

        let ranked = rank(vec![more_xs, more_nines, more_tens, more_arrows]);
        let order: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(order, vec![more_tens, more_arrows, more_nines, more_xs]);
        assert_eq!(ranks(&ranked), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stable_for_identical_scores() {
        let ranked = rank_by(vec![("first", 300), ("second", 300)], |(_, t)| total(*t));
        assert_eq!(ranked[0].item.0, "first");
        assert_eq!(ranked[1].item.0, "second");
        assert_eq!(ranks(&ranked), vec![1, 1]);
    }

    #[test]
    fn test_then_orders_ties_without_splitting_rank() {
        let ranked = rank_by_then(
            vec![("Zoe", 300), ("Adam", 300), ("Mia", 310)],
            |(_, t)| total(*t),
            |a, b| a.0.cmp(b.0),
        );
        let names: Vec<_> = ranked.iter().map(|r| r.item.0).collect();
        assert_eq!(names, vec!["Mia", "Adam", "Zoe"]);
        assert_eq!(ranks(&ranked), vec![1, 2, 2]);
    }

    #[test]
    fn test_summary_sum() {
        let summed: ScoreSummary = [
            ScoreSummary {
                total: 10,
                tens: 1,
                x_count: 1,
                nines: 0,
                arrows: 1,
            },
            ScoreSummary {
                total: 9,
                tens: 0,
                x_count: 0,
                nines: 1,
                arrows: 1,
            },
        ]
        .into_iter()
        .sum();
        assert_eq!(summed.total, 19);
        assert_eq!(summed.tens, 1);
        assert_eq!(summed.nines, 1);
        assert_eq!(summed.arrows, 2);
    }
}
