//! Core data model: normalized events, score breakdowns, pack pages.

pub mod events;
pub mod pack;

pub use events::{BonusKind, NormalizedEvent, ScoredEvent, TeamSide};
pub use pack::{HighlightPack, PackMetrics, StoryPage};
