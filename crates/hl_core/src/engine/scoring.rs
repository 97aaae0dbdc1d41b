//! Highlight Scoring Engine
//!
//! Assigns every normalized event an explainable score: a fixed base weight
//! per event type plus named, additive context bonuses derived from the
//! match state at that point. The pass is a single chronological fold
//! carrying `MatchContextState`; the input order produced by the normalizer
//! is load-bearing, because the bonuses depend on what happened before.
//!
//! Scoring is a pure function of `(event, state-before-event)`: replaying
//! the same sequence always yields identical breakdowns.

use std::collections::BTreeMap;

use super::config::{MatchPhase, ScoringConfig};
use super::context::MatchContextState;
use crate::models::{BonusKind, NormalizedEvent, ScoredEvent};

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self { config: ScoringConfig::default() }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a chronologically ordered event sequence.
    pub fn score(&self, events: &[NormalizedEvent]) -> Vec<ScoredEvent> {
        self.score_with_state(events).0
    }

    /// Like [`score`](Self::score), additionally returning the final match
    /// state (final scoreline) for pack assembly.
    pub fn score_with_state(
        &self,
        events: &[NormalizedEvent],
    ) -> (Vec<ScoredEvent>, MatchContextState) {
        let mut state = MatchContextState::new();
        let mut scored = Vec::with_capacity(events.len());

        for event in events {
            let base_score = self.config.base_score(&event.normalized_type());
            // Zero-weight types stay at zero: context alone never promotes
            // an event the base table does not recognize.
            let bonuses = if base_score > 0 {
                self.context_bonus(event, &state)
            } else {
                BTreeMap::new()
            };
            let total_score = base_score + bonuses.values().sum::<u32>();

            scored.push(ScoredEvent { event: event.clone(), base_score, bonuses, total_score });

            state.apply(event, &self.config);
        }

        (scored, state)
    }

    /// Named bonuses for one event, based on the state BEFORE it is applied.
    fn context_bonus(
        &self,
        event: &NormalizedEvent,
        state: &MatchContextState,
    ) -> BTreeMap<BonusKind, u32> {
        let weights = &self.config.weights;
        let thresholds = &self.config.thresholds;
        let normalized_type = event.normalized_type();
        let mut bonuses = BTreeMap::new();

        // Match-phase bonuses, independent of event type.
        let phase = self.config.phase_of(event.minute);
        if phase >= MatchPhase::LateGame {
            bonuses.insert(BonusKind::LateGame, weights.late_game);
            if phase == MatchPhase::StoppageTime {
                bonuses.insert(BonusKind::VeryLate, weights.very_late);
            }
        }

        if self.config.is_penalty_goal(&normalized_type) {
            bonuses.insert(BonusKind::PenaltyGoal, weights.penalty_goal);
        }

        // Scoreline context for goal-class events.
        if self.config.is_goal(&normalized_type) {
            if let Some(side) = event.side {
                let diff_before = state.goal_diff();
                let (new_home, new_away) = state.scoreline_after_goal(side);
                let diff_after = new_home.abs_diff(new_away);

                if state.scoreless() {
                    bonuses.insert(BonusKind::FirstGoal, weights.first_goal);
                }
                if diff_after == 0 {
                    bonuses.insert(BonusKind::Equalizer, weights.equalizer);
                }
                if diff_before == 0 && diff_after == 1 {
                    bonuses.insert(BonusKind::GoAhead, weights.go_ahead);
                }
                if diff_before == 1 && diff_after == 2 {
                    bonuses.insert(BonusKind::ExtendLead, weights.extend_lead);
                }
                if diff_before >= 2 {
                    bonuses.insert(BonusKind::ExtendBigLead, weights.extend_big_lead);
                }
            }
            // Unknown scoring side: no scoreline reasoning is possible.
        }

        // Crucial chance in a close match late on.
        if self.config.is_chance(&normalized_type)
            && state.goal_diff() <= thresholds.tight_game_margin
            && event.minute >= thresholds.tight_game_minute
        {
            bonuses.insert(BonusKind::TightGameChance, weights.tight_game_chance);
        }

        bonuses
    }
}
