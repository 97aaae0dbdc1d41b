//! Event Normalizer
//!
//! Flattens raw, possibly malformed feed records into `NormalizedEvent`s and
//! sorts them chronologically. The normalizer never rejects a record:
//! unparseable clock fields default to 0, missing types stay empty, missing
//! references yield an empty participant list. Malformed temporal data must
//! not abort the whole pipeline.

use serde_json::Value;

use crate::models::{NormalizedEvent, TeamSide};

/// Raw record fields holding player references, in participant order.
const PLAYER_REF_FIELDS: [&str; 3] = ["playerRef1", "playerRef2", "playerRef3"];

/// Raw record fields that may name the acting team.
const TEAM_REF_FIELDS: [&str; 2] = ["teamRef1", "team"];

pub struct Normalizer {
    home_team_id: Option<String>,
    away_team_id: Option<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self { home_team_id: None, away_team_id: None }
    }

    /// Enable side resolution against the match's contestant ids.
    pub fn with_teams(mut self, home_team_id: &str, away_team_id: &str) -> Self {
        self.home_team_id = Some(home_team_id.to_string());
        self.away_team_id = Some(away_team_id.to_string());
        self
    }

    /// Normalize and chronologically sort a raw event sequence.
    ///
    /// `original_index` is assigned from the input position before sorting;
    /// the sort is stable on it, so input order survives equal timestamps.
    pub fn normalize(&self, raw_events: &[Value]) -> Vec<NormalizedEvent> {
        let mut events: Vec<NormalizedEvent> = raw_events
            .iter()
            .enumerate()
            .map(|(index, record)| self.normalize_one(index, record))
            .collect();
        events.sort_by_key(|event| event.sort_key());
        events
    }

    fn normalize_one(&self, original_index: usize, record: &Value) -> NormalizedEvent {
        let event_type = record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        NormalizedEvent {
            original_index,
            event_type,
            minute: parse_clock_field(record.get("minute")),
            second: parse_clock_field(record.get("second")),
            side: self.resolve_side(record),
            participants: collect_participants(record),
            raw: record.clone(),
        }
    }

    fn resolve_side(&self, record: &Value) -> Option<TeamSide> {
        let team_ref = TEAM_REF_FIELDS
            .iter()
            .find_map(|field| record.get(*field).and_then(Value::as_str))?;

        if self.home_team_id.as_deref() == Some(team_ref) {
            Some(TeamSide::Home)
        } else if self.away_team_id.as_deref() == Some(team_ref) {
            Some(TeamSide::Away)
        } else {
            None
        }
    }
}

/// Total clock-field parser: JSON number, numeric string, or 0.
///
/// Feed minutes arrive as strings; anything unparseable (wrong type, missing
/// key, non-numeric text) is substituted with 0 rather than propagated.
fn parse_clock_field(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(number)) => number.as_u64().map(|n| n as u32).unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse::<u32>().unwrap_or_else(|_| {
            log::debug!("unparseable clock field {:?}, defaulting to 0", text);
            0
        }),
        _ => 0,
    }
}

fn collect_participants(record: &Value) -> Vec<String> {
    PLAYER_REF_FIELDS
        .iter()
        .filter_map(|field| record.get(*field).and_then(Value::as_str))
        .filter(|reference| !reference.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn sorts_chronologically_with_stable_ties() {
        let raw = vec![
            json!({"type": "corner", "minute": "55", "second": "10"}),
            json!({"type": "goal", "minute": "10", "second": "0"}),
            json!({"type": "miss", "minute": "10", "second": "0"}),
        ];
        let events = Normalizer::new().normalize(&raw);
        assert_eq!(events[0].event_type, "goal");
        assert_eq!(events[0].original_index, 1);
        // Equal timestamp: input order survives.
        assert_eq!(events[1].event_type, "miss");
        assert_eq!(events[1].original_index, 2);
        assert_eq!(events[2].event_type, "corner");
    }

    #[test]
    fn malformed_minute_defaults_to_zero() {
        let raw = vec![json!({"type": "goal", "minute": "unknown"})];
        let events = Normalizer::new().normalize(&raw);
        assert_eq!(events[0].minute, 0);
        assert_eq!(events[0].second, 0);
        assert_eq!(events[0].event_type, "goal");
    }

    #[test]
    fn opaque_record_yields_defaulted_event() {
        let raw = vec![json!({"garbage": true}), json!(null)];
        let events = Normalizer::new().normalize(&raw);
        assert_eq!(events.len(), 2);
        for event in &events {
            assert_eq!(event.event_type, "");
            assert_eq!(event.minute, 0);
            assert!(event.participants.is_empty());
            assert!(event.side.is_none());
        }
    }

    #[test]
    fn resolves_side_from_team_ref() {
        let raw = vec![
            json!({"type": "goal", "minute": "10", "teamRef1": "t1"}),
            json!({"type": "goal", "minute": "20", "teamRef1": "t2"}),
            json!({"type": "goal", "minute": "30", "teamRef1": "t9"}),
            json!({"type": "goal", "minute": "40", "team": "t1"}),
        ];
        let events = Normalizer::new().with_teams("t1", "t2").normalize(&raw);
        assert_eq!(events[0].side, Some(TeamSide::Home));
        assert_eq!(events[1].side, Some(TeamSide::Away));
        assert_eq!(events[2].side, None);
        assert_eq!(events[3].side, Some(TeamSide::Home));
    }

    #[test]
    fn collects_player_references_in_field_order() {
        let raw = vec![json!({
            "type": "goal",
            "minute": "10",
            "playerRef1": "p100",
            "playerRef2": "p200",
        })];
        let events = Normalizer::new().normalize(&raw);
        assert_eq!(events[0].participants, vec!["p100", "p200"]);
    }

    #[test]
    fn numeric_minute_is_accepted() {
        let raw = vec![json!({"type": "goal", "minute": 87, "second": 30})];
        let events = Normalizer::new().normalize(&raw);
        assert_eq!(events[0].minute, 87);
        assert_eq!(events[0].second, 30);
    }

    proptest! {
        #[test]
        fn output_is_sorted_and_indices_unique(
            clocks in prop::collection::vec((0u32..100, 0u32..60), 0..40)
        ) {
            let raw: Vec<_> = clocks
                .iter()
                .map(|(m, s)| json!({"type": "corner", "minute": m.to_string(), "second": s.to_string()}))
                .collect();
            let events = Normalizer::new().normalize(&raw);

            for pair in events.windows(2) {
                prop_assert!(
                    (pair[0].minute, pair[0].second) <= (pair[1].minute, pair[1].second)
                );
            }

            let mut indices: Vec<_> = events.iter().map(|e| e.original_index).collect();
            indices.sort_unstable();
            indices.dedup();
            prop_assert_eq!(indices.len(), events.len());
        }
    }
}
