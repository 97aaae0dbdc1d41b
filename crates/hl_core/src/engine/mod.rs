//! Highlight Engine
//!
//! The core pipeline: normalize raw feed records, score them in
//! chronological order against running match context, select the top-N and
//! reorder chronologically. Single-threaded and synchronous; each stage
//! fully consumes its input before the next begins. One engine pass handles
//! exactly one match, so independent matches can be processed in parallel
//! without shared state.

pub mod config;
pub mod context;
pub mod normalizer;
pub mod scoring;
pub mod selector;

pub use config::{BonusWeights, MatchPhase, PhaseThresholds, ScoringConfig};
pub use context::MatchContextState;
pub use normalizer::Normalizer;
pub use scoring::ScoringEngine;
pub use selector::select;
