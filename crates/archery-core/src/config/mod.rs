//! Configuration file support.
//!
//! The config file is TOML:
//!
//! ```toml
//! scoring_rule = 1
//!
//! [leaderboard]
//! drop_lowest = 2
//! limit = 20
//! ```
//!
//! Every key is optional and falls back to the values in [`defaults`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::MAX_SCORING_RULE;

/// Default values used when a key is missing from the config file.
pub mod defaults {
    /// Scoring rule applied when parsing score strings.
    pub const SCORING_RULE: u8 = 1;

    /// Worst events excluded from drop-lowest leaderboards.
    pub const DROP_LOWEST: usize = crate::leaderboard::DEFAULT_DROP_COUNT;

    /// Leaderboard rows shown in console output.
    pub const LIMIT: usize = 20;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scoring_rule: u8,
    pub leaderboard: LeaderboardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaderboardConfig {
    pub drop_lowest: usize,
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring_rule: defaults::SCORING_RULE,
            leaderboard: LeaderboardConfig::default(),
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            drop_lowest: defaults::DROP_LOWEST,
            limit: defaults::LIMIT,
        }
    }
}

impl Config {
    /// Load and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_scoring_rule(self.scoring_rule)
    }
}

/// Reject scoring rules the results service does not define
pub fn validate_scoring_rule(scoring_rule: u8) -> Result<()> {
    if scoring_rule > MAX_SCORING_RULE {
        return Err(Error::InvalidScoringRule(scoring_rule));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scoring_rule, 1);
        assert_eq!(config.leaderboard.drop_lowest, 2);
        assert_eq!(config.leaderboard.limit, 20);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(
            r#"
scoring_rule = 13

[leaderboard]
drop_lowest = 1
"#,
        )
        .unwrap();
        assert_eq!(config.scoring_rule, 13);
        assert_eq!(config.leaderboard.drop_lowest, 1);
        assert_eq!(config.leaderboard.limit, 20);
    }

    #[test]
    fn test_rejects_unknown_rule() {
        let err = Config::parse("scoring_rule = 17").unwrap_err();
        assert!(matches!(err, Error::InvalidScoringRule(17)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = Config::parse("scoring = 1").unwrap_err();
        assert!(matches!(err, Error::ConfigParseError(_)));
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = Config::parse("scoring_rule = 1\n[leaderboard\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"), "{}", message);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scoring_rule = 0").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.scoring_rule, 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/archery.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
