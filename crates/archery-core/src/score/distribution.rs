use std::collections::BTreeMap;

use serde::Serialize;

use super::arrow::ArrowValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributionBin {
    pub score: u32,
    pub count: u32,
}

/// How often each arrow value was shot across a set of score strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    /// Highest value first
    pub bins: Vec<DistributionBin>,
    pub total_arrows: u32,
    pub max_count: u32,
}

impl ScoreDistribution {
    /// Count arrow values over raw score strings. No-shot markers are ignored.
    pub fn from_raw_scores<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
        let mut total_arrows = 0;

        for raw in sources {
            let sanitized = raw
                .unwrap_or_default()
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase);

            for c in sanitized {
                let Some(arrow) = ArrowValue::from_char(c) else {
                    continue;
                };
                if !arrow.counts_as_arrow {
                    continue;
                }
                *counts.entry(arrow.value).or_default() += 1;
                total_arrows += 1;
            }
        }

        let bins: Vec<DistributionBin> = counts
            .into_iter()
            .rev()
            .map(|(score, count)| DistributionBin { score, count })
            .collect();
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);

        Self {
            bins,
            total_arrows,
            max_count,
        }
    }
}
