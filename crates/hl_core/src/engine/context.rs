//! Running match context threaded through one scoring pass.

use serde::{Deserialize, Serialize};

use super::config::{MatchPhase, ScoringConfig};
use crate::models::{NormalizedEvent, TeamSide};

/// Mutable, single-owner state accumulated while scoring one match.
///
/// Owned exclusively by the scoring engine during a single chronological
/// pass and discarded (or returned read-only) afterwards. Never reuse an
/// instance across two matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchContextState {
    pub home_goals: u32,
    pub away_goals: u32,
    pub last_event_type: Option<String>,
    pub last_side: Option<TeamSide>,
    pub phase: MatchPhase,
}

impl MatchContextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute goal differential.
    pub fn goal_diff(&self) -> u32 {
        self.home_goals.abs_diff(self.away_goals)
    }

    /// True until the first goal of the match has been applied.
    pub fn scoreless(&self) -> bool {
        self.home_goals == 0 && self.away_goals == 0
    }

    /// Scoreline after `side` scores, without mutating the state.
    pub fn scoreline_after_goal(&self, side: TeamSide) -> (u32, u32) {
        match side {
            TeamSide::Home => (self.home_goals + 1, self.away_goals),
            TeamSide::Away => (self.home_goals, self.away_goals + 1),
        }
    }

    /// Fold one event into the state. Called exactly once per event, in
    /// chronological order, after that event's bonuses were computed.
    pub fn apply(&mut self, event: &NormalizedEvent, config: &ScoringConfig) {
        let normalized_type = event.normalized_type();
        if config.is_goal(&normalized_type) {
            match event.side {
                Some(TeamSide::Home) => self.home_goals += 1,
                Some(TeamSide::Away) => self.away_goals += 1,
                // Unknown scorer: leave the scoreline untouched.
                None => {}
            }
        }
        self.last_event_type = Some(normalized_type);
        self.last_side = event.side;
        self.phase = config.phase_of(event.minute);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn goal(minute: u32, side: Option<TeamSide>) -> NormalizedEvent {
        NormalizedEvent {
            original_index: 0,
            event_type: "goal".to_string(),
            minute,
            second: 0,
            side,
            participants: vec![],
            raw: Value::Null,
        }
    }

    #[test]
    fn goals_update_the_scoreline() {
        let config = ScoringConfig::default();
        let mut state = MatchContextState::new();
        assert!(state.scoreless());

        state.apply(&goal(10, Some(TeamSide::Home)), &config);
        state.apply(&goal(55, Some(TeamSide::Away)), &config);
        assert_eq!((state.home_goals, state.away_goals), (1, 1));
        assert_eq!(state.goal_diff(), 0);
        assert_eq!(state.last_event_type.as_deref(), Some("goal"));
    }

    #[test]
    fn unknown_side_leaves_scoreline_untouched() {
        let config = ScoringConfig::default();
        let mut state = MatchContextState::new();
        state.apply(&goal(10, None), &config);
        assert!(state.scoreless());
    }

    #[test]
    fn phase_tracks_the_latest_event() {
        let config = ScoringConfig::default();
        let mut state = MatchContextState::new();
        state.apply(&goal(10, Some(TeamSide::Home)), &config);
        assert_eq!(state.phase, MatchPhase::FirstHalf);
        state.apply(&goal(85, Some(TeamSide::Away)), &config);
        assert_eq!(state.phase, MatchPhase::LateGame);
    }
}
