use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which side of the match an event belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

/// Uniform event representation produced by the normalizer.
///
/// `original_index` is the 0-based position in the raw input, recorded
/// before any sorting. It is the stable tie-break key for ranking and must
/// never be recomputed after the chronological sort.
///
/// `minute == 0` means "unknown or start of match" - malformed clock fields
/// are defaulted, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedEvent {
    pub original_index: usize,
    #[serde(rename = "type")]
    pub event_type: String,
    pub minute: u32,
    pub second: u32,
    /// Resolved side, when the raw team reference matched a configured
    /// contestant id. Unknown team stays `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TeamSide>,
    /// Player/team reference ids found on the raw record, in field order.
    pub participants: Vec<String>,
    /// The raw record this event was normalized from.
    pub raw: serde_json::Value,
}

impl NormalizedEvent {
    /// Lowercased, trimmed event type used for every table lookup.
    pub fn normalized_type(&self) -> String {
        self.event_type.trim().to_lowercase()
    }

    /// Chronological sort key: `(minute, second)`, ties by input position.
    pub fn sort_key(&self) -> (u32, u32, usize) {
        (self.minute, self.second, self.original_index)
    }
}

/// Closed set of context bonus names.
///
/// Modeled as an enum rather than free-form strings so a breakdown is a
/// fixed-shape map and serialized names cannot drift between runs.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    FirstGoal,
    Equalizer,
    GoAhead,
    ExtendLead,
    ExtendBigLead,
    LateGame,
    VeryLate,
    PenaltyGoal,
    TightGameChance,
}

impl BonusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::FirstGoal => "first_goal",
            BonusKind::Equalizer => "equalizer",
            BonusKind::GoAhead => "go_ahead",
            BonusKind::ExtendLead => "extend_lead",
            BonusKind::ExtendBigLead => "extend_big_lead",
            BonusKind::LateGame => "late_game",
            BonusKind::VeryLate => "very_late",
            BonusKind::PenaltyGoal => "penalty_goal",
            BonusKind::TightGameChance => "tight_game_chance",
        }
    }
}

/// A normalized event with its full score breakdown attached.
///
/// Invariant: `total_score == base_score + sum(bonuses.values())`.
/// The breakdown is retained so selection stays explainable, not just the
/// total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredEvent {
    pub event: NormalizedEvent,
    pub base_score: u32,
    pub bonuses: BTreeMap<BonusKind, u32>,
    pub total_score: u32,
}

impl ScoredEvent {
    pub fn bonus_total(&self) -> u32 {
        self.bonuses.values().sum()
    }

    /// Human-readable breakdown, e.g. `base=100 first_goal=25 late_game=15`.
    pub fn explanation(&self) -> String {
        let mut parts = vec![format!("base={}", self.base_score)];
        for (kind, value) in &self.bonuses {
            parts.push(format!("{}={}", kind.as_str(), value));
        }
        parts.join(" ")
    }
}
