//! JSON API for building a highlight pack in one call.
//!
//! The request carries the raw match document plus optional squads, asset
//! descriptions, and scoring overrides. Malformed individual events are
//! tolerated downstream; only a structurally unusable request (bad schema
//! version, negative top_n, unusable match document) errors out.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::assets::parse_asset_descriptions;
use crate::data::{parse_squad_players, MatchFeed};
use crate::engine::{select, Normalizer, ScoringConfig, ScoringEngine};
use crate::error::{CoreError, Result};
use crate::models::HighlightPack;
use crate::pack::assemble_pack;

pub const SCHEMA_VERSION: u8 = 1;

fn default_top_n() -> i64 {
    7
}

#[derive(Debug, Deserialize)]
pub struct PackRequest {
    pub schema_version: u8,
    /// Number of highlight pages. Signed on the wire so a negative value is
    /// rejected as a caller bug instead of silently clamped.
    #[serde(default = "default_top_n")]
    pub top_n: i64,
    pub match_data: Value,
    #[serde(default)]
    pub home_squad: Option<Value>,
    #[serde(default)]
    pub away_squad: Option<Value>,
    #[serde(default)]
    pub asset_descriptions: Option<Value>,
    /// Scoring policy override; defaults to the built-in table.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

/// Build a pack from a typed request.
pub fn build_pack(request: PackRequest) -> Result<HighlightPack> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported schema_version {}, expected {}",
            request.schema_version, SCHEMA_VERSION
        )));
    }
    if request.top_n < 0 {
        return Err(CoreError::InvalidParameter(format!(
            "top_n must be non-negative, got {}",
            request.top_n
        )));
    }
    let top_n = request.top_n as usize;

    let feed = MatchFeed::from_value(&request.match_data)?;

    let mut players_by_id: HashMap<String, String> = HashMap::new();
    for squad in [&request.home_squad, &request.away_squad].into_iter().flatten() {
        players_by_id.extend(parse_squad_players(squad));
    }

    let assets = request
        .asset_descriptions
        .as_ref()
        .map(parse_asset_descriptions)
        .unwrap_or_default();

    let engine = ScoringEngine::with_config(request.scoring.unwrap_or_default());
    let events = Normalizer::new()
        .with_teams(&feed.home_team_id, &feed.away_team_id)
        .normalize(&feed.events);
    let (scored, final_state) = engine.score_with_state(&events);
    let selected = select(scored, top_n);

    tracing::debug!(
        events = events.len(),
        selected = selected.len(),
        "assembling highlight pack"
    );

    Ok(assemble_pack(&feed, &selected, &final_state, &players_by_id, &assets, engine.config()))
}

/// JSON-in, JSON-out entry point.
pub fn build_pack_json(request_json: &str) -> Result<String> {
    let request: PackRequest = serde_json::from_str(request_json)?;
    let pack = build_pack(request)?;
    Ok(serde_json::to_string(&pack)?)
}
