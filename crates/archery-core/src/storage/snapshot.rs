use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::validate_scoring_rule;
use crate::error::{Error, Result};
use crate::leaderboard::{ArcherInfo, CategoryInfo, ScoreRow, assign_category_rankings};
use crate::ranking::ScoreLike;
use crate::score::{parse_score, serialize_tie_break};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
}

/// A category and the archers assigned to it for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub archers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    /// Raw score strings keyed by archer id
    #[serde(default)]
    pub scores: BTreeMap<u32, String>,
}

impl EventRecord {
    /// The first category listing `archer_id`
    pub fn category_of(&self, archer_id: u32) -> Option<&CategoryRecord> {
        self.categories
            .iter()
            .find(|category| category.archers.contains(&archer_id))
    }

    pub fn category_infos(&self) -> Vec<CategoryInfo> {
        self.categories
            .iter()
            .map(|category| CategoryInfo {
                id: category.id,
                name: category.name.clone(),
                display_order: category.display_order,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    pub tournament: TournamentInfo,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub archers: Vec<ArcherInfo>,
}

impl TournamentSnapshot {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let snapshot = Self::parse(&content)?;
        debug!(
            "Loaded snapshot of '{}' from {}: {} events, {} archers",
            snapshot.tournament.name,
            path.as_ref().display(),
            snapshot.events.len(),
            snapshot.archers.len()
        );
        Ok(snapshot)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn event(&self, event_id: u32) -> Result<&EventRecord> {
        self.events
            .iter()
            .find(|event| event.id == event_id)
            .ok_or(Error::EventNotFound(event_id))
    }

    pub fn archer(&self, archer_id: u32) -> Result<&ArcherInfo> {
        self.archers
            .iter()
            .find(|archer| archer.id == archer_id)
            .ok_or(Error::ArcherNotFound(archer_id))
    }

    /// Score every event of the tournament.
    ///
    /// Each raw score is parsed with `scoring_rule`, attached to the
    /// archer's category and ranked within it. A score from an unknown
    /// archer, or from an archer no category lists, aborts the ingest.
    pub fn ingest(&self, scoring_rule: u8) -> Result<Vec<ScoreRow>> {
        validate_scoring_rule(scoring_rule)?;

        let mut rows = Vec::new();
        for event in &self.events {
            rows.extend(self.score_event(event, scoring_rule)?);
        }

        info!(
            "Ingested {} scores across {} events of '{}'",
            rows.len(),
            self.events.len(),
            self.tournament.name
        );
        Ok(rows)
    }

    /// Score a single event
    pub fn ingest_event(&self, event_id: u32, scoring_rule: u8) -> Result<Vec<ScoreRow>> {
        validate_scoring_rule(scoring_rule)?;
        self.score_event(self.event(event_id)?, scoring_rule)
    }

    /// Raw score strings of one event, or of every event when `event_id` is `None`
    pub fn raw_scores(&self, event_id: Option<u32>) -> Result<Vec<&str>> {
        let events: Vec<&EventRecord> = match event_id {
            Some(id) => vec![self.event(id)?],
            None => self.events.iter().collect(),
        };
        Ok(events
            .into_iter()
            .flat_map(|event| event.scores.values().map(String::as_str))
            .collect())
    }

    fn score_event(&self, event: &EventRecord, scoring_rule: u8) -> Result<Vec<ScoreRow>> {
        let synced_at = event.last_synced_at.or(self.tournament.last_synced_at);

        let mut rows = Vec::with_capacity(event.scores.len());
        for (&archer_id, raw) in &event.scores {
            let archer = self.archer(archer_id)?;
            let category = event
                .category_of(archer_id)
                .ok_or(Error::UncategorizedArcher {
                    event_id: event.id,
                    archer_id,
                })?;

            let breakdown = parse_score(Some(raw), scoring_rule);
            rows.push(ScoreRow {
                archer: archer.clone(),
                tournament_id: self.tournament.id,
                tournament_name: self.tournament.name.clone(),
                event_id: event.id,
                event_name: event.name.clone(),
                event_display_order: event.display_order,
                category_id: Some(category.id),
                category_name: Some(category.name.clone()),
                ranking: None,
                score: breakdown.score(),
                raw_score: raw.clone(),
                tie_break: serialize_tie_break(&breakdown.tie_break)?,
                synced_at,
            });
        }

        assign_category_rankings(&mut rows);
        debug!("Scored {} archers in event {}", rows.len(), event.id);
        Ok(rows)
    }
}
