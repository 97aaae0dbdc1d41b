//! # hl_core - Deterministic Match Highlight Engine
//!
//! This library converts a raw, possibly noisy stream of match events into
//! a ranked, chronologically ordered highlight pack suitable for a
//! consumer-facing preview.
//!
//! ## Features
//! - Fail-soft normalization (malformed records default, never abort)
//! - Explainable scoring: base weight + named context bonuses per event
//! - Deterministic selection (same input = same pack content)
//! - JSON API for easy integration with external loaders and viewers

pub mod api;
pub mod assets;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod pack;

// Re-export main API functions
pub use api::{build_pack, build_pack_json, PackRequest};
pub use engine::{select, MatchContextState, Normalizer, ScoringConfig, ScoringEngine};
pub use error::{CoreError, Result};
pub use models::{BonusKind, HighlightPack, NormalizedEvent, ScoredEvent, StoryPage, TeamSide};
