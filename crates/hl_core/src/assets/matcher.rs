//! Asset matching: resolve an illustrative image for a highlight from the
//! event type and the players involved. The function is total - when
//! nothing matches it falls back to the placeholder reference.

use super::descriptions::AssetDescription;
use crate::models::NormalizedEvent;

/// Returned when no asset description matches the event.
pub const PLACEHOLDER_ASSET: &str = "../assets/placeholder.png";

/// Relevance of one asset for one event.
///
/// A direct player-name hit dominates keyword matches by an order of
/// magnitude: an image clearly showing the involved player beats a generic
/// event-type picture.
fn score_asset(asset: &AssetDescription, event_type: &str, player_names: &[String]) -> u32 {
    let description = asset.description_lower();
    let mut score = 0;

    for name in player_names {
        let name = name.trim();
        if !name.is_empty() && description.contains(&name.to_lowercase()) {
            score += 100;
        }
    }

    if event_type == "goal" || event_type == "penalty goal" {
        if description.contains("scores") || description.contains("goal") {
            score += 25;
        }
        if description.contains("celebrates") || description.contains("celebration") {
            score += 15;
        }
    }

    if event_type == "penalty goal" && description.contains("penalty") {
        score += 25;
    }

    if event_type == "yellow card" && description.contains("card") {
        score += 10;
    }

    score
}

/// Pick the best image reference for an event, or the placeholder.
///
/// Ties keep the first description in index order, so matching is
/// deterministic for a fixed index.
pub fn pick_asset_for_event(
    event: &NormalizedEvent,
    player_names: &[String],
    assets: &[AssetDescription],
) -> String {
    let event_type = event.normalized_type();

    let mut best_score = 0;
    let mut best_filename: Option<&str> = None;

    for asset in assets {
        let score = score_asset(asset, &event_type, player_names);
        if score > best_score {
            best_score = score;
            best_filename = Some(&asset.filename);
        }
    }

    match best_filename {
        Some(filename) => format!("../assets/{}", filename),
        None => PLACEHOLDER_ASSET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::descriptions::parse_asset_descriptions;
    use serde_json::json;

    fn event(event_type: &str) -> NormalizedEvent {
        NormalizedEvent {
            original_index: 0,
            event_type: event_type.to_string(),
            minute: 10,
            second: 0,
            side: None,
            participants: vec![],
            raw: serde_json::Value::Null,
        }
    }

    fn index() -> Vec<AssetDescription> {
        parse_asset_descriptions(&json!([
            {"filename": "crowd.jpg", "description": "The crowd celebrates a goal"},
            {"filename": "daizen.jpg", "description": "Daizen Maeda scores at the near post"},
            {"filename": "card.jpg", "description": "Referee shows a card"},
        ]))
    }

    #[test]
    fn player_name_match_beats_keyword_match() {
        let image = pick_asset_for_event(
            &event("goal"),
            &["Daizen Maeda".to_string()],
            &index(),
        );
        assert_eq!(image, "../assets/daizen.jpg");
    }

    #[test]
    fn keyword_match_applies_without_players() {
        let image = pick_asset_for_event(&event("goal"), &[], &index());
        assert_eq!(image, "../assets/crowd.jpg");
    }

    #[test]
    fn card_event_matches_card_imagery() {
        let image = pick_asset_for_event(&event("yellow card"), &[], &index());
        assert_eq!(image, "../assets/card.jpg");
    }

    #[test]
    fn falls_back_to_placeholder() {
        let image = pick_asset_for_event(&event("corner"), &[], &index());
        assert_eq!(image, PLACEHOLDER_ASSET);
        let no_index = pick_asset_for_event(&event("goal"), &[], &[]);
        assert_eq!(no_index, PLACEHOLDER_ASSET);
    }
}
