//! Scoring Configuration
//!
//! Centralized configuration for the highlight scoring engine. Base weights,
//! bonus weights and phase thresholds are data, not mechanism: swapping this
//! struct changes policy without touching the engine.
//!
//! ## Usage
//!
//! ```rust
//! use hl_core::engine::config::ScoringConfig;
//!
//! // Default weights (broadcast-style highlight mix)
//! let config = ScoringConfig::default();
//!
//! // Goals-only preset
//! let goals = ScoringConfig::goals_only();
//!
//! // From environment variable
//! let from_env = ScoringConfig::from_env_or_default();
//! ```
//!
//! ## Environment Variables
//!
//! - `HL_SCORING_PROFILE`: Select preset (goals_only, default)

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default base weight per event type. Unknown types score 0.
static DEFAULT_BASE_SCORES: Lazy<Vec<(&'static str, u32)>> = Lazy::new(|| {
    vec![
        ("goal", 100),
        ("penalty goal", 95),
        ("red card", 90),
        ("penalty won", 70),
        ("penalty lost", 60),
        ("attempt saved", 60),
        ("attempt blocked", 55),
        ("post", 50),
        ("miss", 40),
        ("yellow card", 30),
        ("corner", 10),
    ]
});

/// Scoring engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Event type -> base weight. Keys are lowercase, trimmed.
    pub base_scores: HashMap<String, u32>,
    /// Event types that change the scoreline.
    pub goal_types: Vec<String>,
    /// Near-miss event types eligible for the tight-game bonus.
    pub chance_types: Vec<String>,
    /// The goal type that additionally earns the penalty bonus.
    pub penalty_goal_type: String,
    pub weights: BonusWeights,
    pub thresholds: PhaseThresholds,
}

/// Additive weight of each context bonus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusWeights {
    pub first_goal: u32,
    pub equalizer: u32,
    pub go_ahead: u32,
    pub extend_lead: u32,
    pub extend_big_lead: u32,
    pub late_game: u32,
    pub very_late: u32,
    pub penalty_goal: u32,
    pub tight_game_chance: u32,
}

impl Default for BonusWeights {
    fn default() -> Self {
        Self {
            first_goal: 25,
            equalizer: 30,
            go_ahead: 30,
            extend_lead: 15,
            extend_big_lead: 5,
            late_game: 15,
            very_late: 5,
            penalty_goal: 10,
            tight_game_chance: 20,
        }
    }
}

/// Elapsed-minute cutoffs for match phases and the tight-game window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseThresholds {
    /// First minute of the second half.
    pub second_half_minute: u32,
    /// Minute from which the late-game bonus applies.
    pub late_game_minute: u32,
    /// Minute from which the extra very-late bonus applies.
    pub very_late_minute: u32,
    /// Minute from which a close-match chance counts as a tight-game moment.
    pub tight_game_minute: u32,
    /// Maximum goal differential for a match to count as tight.
    pub tight_game_margin: u32,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            second_half_minute: 45,
            late_game_minute: 80,
            very_late_minute: 90,
            tight_game_minute: 75,
            tight_game_margin: 1,
        }
    }
}

/// Elapsed-minute bucket of the match.
///
/// Ordered so phase comparisons read naturally (`phase >= LateGame`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    FirstHalf,
    SecondHalf,
    LateGame,
    StoppageTime,
}

impl Default for MatchPhase {
    fn default() -> Self {
        Self::FirstHalf
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_scores: DEFAULT_BASE_SCORES
                .iter()
                .map(|(name, weight)| (name.to_string(), *weight))
                .collect(),
            goal_types: vec!["goal".to_string(), "penalty goal".to_string()],
            chance_types: vec![
                "attempt saved".to_string(),
                "attempt blocked".to_string(),
                "miss".to_string(),
                "post".to_string(),
            ],
            penalty_goal_type: "penalty goal".to_string(),
            weights: BonusWeights::default(),
            thresholds: PhaseThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Goals-only preset - only scoreline-changing events and red cards
    /// carry base weight, everything else is dropped by the selector.
    pub fn goals_only() -> Self {
        let mut config = Self::default();
        let goal_types = config.goal_types.clone();
        config
            .base_scores
            .retain(|name, _| goal_types.contains(name) || name == "red card");
        config
    }

    /// Load from environment variable HL_SCORING_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        match env::var("HL_SCORING_PROFILE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "goals_only" => Self::goals_only(),
            _ => Self::default(),
        }
    }

    /// Base weight for a normalized (lowercase, trimmed) event type.
    /// Unknown types return 0, never an error.
    pub fn base_score(&self, normalized_type: &str) -> u32 {
        self.base_scores.get(normalized_type).copied().unwrap_or(0)
    }

    pub fn is_goal(&self, normalized_type: &str) -> bool {
        self.goal_types.iter().any(|t| t == normalized_type)
    }

    pub fn is_chance(&self, normalized_type: &str) -> bool {
        self.chance_types.iter().any(|t| t == normalized_type)
    }

    pub fn is_penalty_goal(&self, normalized_type: &str) -> bool {
        self.penalty_goal_type == normalized_type
    }

    /// Phase bucket for an elapsed minute.
    pub fn phase_of(&self, minute: u32) -> MatchPhase {
        if minute >= self.thresholds.very_late_minute {
            MatchPhase::StoppageTime
        } else if minute >= self.thresholds.late_game_minute {
            MatchPhase::LateGame
        } else if minute >= self.thresholds.second_half_minute {
            MatchPhase::SecondHalf
        } else {
            MatchPhase::FirstHalf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_known_weights() {
        let config = ScoringConfig::default();
        assert_eq!(config.base_score("goal"), 100);
        assert_eq!(config.base_score("penalty goal"), 95);
        assert_eq!(config.base_score("corner"), 10);
        assert_eq!(config.base_score("throw-in"), 0);
    }

    #[test]
    fn goals_only_preset_drops_minor_events() {
        let config = ScoringConfig::goals_only();
        assert_eq!(config.base_score("goal"), 100);
        assert_eq!(config.base_score("red card"), 90);
        assert_eq!(config.base_score("yellow card"), 0);
        assert_eq!(config.base_score("corner"), 0);
    }

    #[test]
    fn phase_buckets_follow_thresholds() {
        let config = ScoringConfig::default();
        assert_eq!(config.phase_of(0), MatchPhase::FirstHalf);
        assert_eq!(config.phase_of(44), MatchPhase::FirstHalf);
        assert_eq!(config.phase_of(45), MatchPhase::SecondHalf);
        assert_eq!(config.phase_of(80), MatchPhase::LateGame);
        assert_eq!(config.phase_of(90), MatchPhase::StoppageTime);
        assert!(config.phase_of(85) >= MatchPhase::LateGame);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = ScoringConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
