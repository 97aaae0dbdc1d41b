//! Engine configuration.

mod scoring_config;

pub use scoring_config::{BonusWeights, MatchPhase, PhaseThresholds, ScoringConfig};
