//! Match feed parsing.
//!
//! The upstream feed is a single JSON document: `matchInfo` describes the
//! contestants and date, `messages[0].message` holds the raw event list.
//! Individual events are left opaque here - tolerating malformed event
//! fields is the normalizer's job. Only a structurally unusable document
//! (no contestants, no event list) is an error.

use std::path::Path;

use serde_json::Value;

use crate::error::{CoreError, Result};

/// Parsed match feed: contestant identity plus the raw event list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchFeed {
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_name: String,
    pub away_name: String,
    pub local_date: Option<String>,
    pub events: Vec<Value>,
    /// Where this feed came from, echoed into the pack's `source` field.
    pub source: String,
}

impl MatchFeed {
    pub fn from_value(value: &Value) -> Result<Self> {
        let match_info = value
            .get("matchInfo")
            .ok_or_else(|| CoreError::ParseError("missing matchInfo".to_string()))?;

        let contestants = match_info
            .get("contestant")
            .and_then(Value::as_array)
            .filter(|list| list.len() >= 2)
            .ok_or_else(|| {
                CoreError::ParseError("matchInfo.contestant needs two entries".to_string())
            })?;

        let (home_team_id, away_team_id) = resolve_team_ids(contestants)?;

        let events = value
            .get("messages")
            .and_then(Value::as_array)
            .and_then(|messages| messages.first())
            .and_then(|first| first.get("message"))
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| {
                CoreError::ParseError("missing messages[0].message event list".to_string())
            })?;

        Ok(Self {
            home_team_id,
            away_team_id,
            home_name: contestant_name(&contestants[0]),
            away_name: contestant_name(&contestants[1]),
            local_date: match_info.get("localDate").and_then(Value::as_str).map(str::to_string),
            events,
            source: "inline".to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw)?;
        let mut feed = Self::from_value(&value)?;
        feed.source = path.display().to_string();
        log::debug!("loaded match feed from {} ({} events)", feed.source, feed.events.len());
        Ok(feed)
    }

    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_name, self.away_name)
    }
}

/// Home/away ids from contestant `position`, falling back to the first and
/// second entries when the position field is missing.
fn resolve_team_ids(contestants: &[Value]) -> Result<(String, String)> {
    let mut home_id = None;
    let mut away_id = None;

    for contestant in contestants {
        let id = contestant.get("id").and_then(Value::as_str);
        match contestant.get("position").and_then(Value::as_str) {
            Some("home") => home_id = id,
            Some("away") => away_id = id,
            _ => {}
        }
    }

    let home_id = home_id
        .or_else(|| contestants[0].get("id").and_then(Value::as_str))
        .ok_or_else(|| CoreError::ParseError("home contestant has no id".to_string()))?;
    let away_id = away_id
        .or_else(|| contestants[1].get("id").and_then(Value::as_str))
        .ok_or_else(|| CoreError::ParseError("away contestant has no id".to_string()))?;

    Ok((home_id.to_string(), away_id.to_string()))
}

fn contestant_name(contestant: &Value) -> String {
    contestant
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string()
}
