//! Pack Assembler
//!
//! Wraps selected highlights into the final `HighlightPack`: a cover page,
//! one page per highlight in chronological order, a fixed fallback page
//! when nothing survived selection, and a fixed closing page when anything
//! did. The assembler never re-ranks - it consumes the selector's output
//! order as-is.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::assets::{pick_asset_for_event, AssetDescription};
use crate::data::{resolve_player_name, MatchFeed};
use crate::engine::config::ScoringConfig;
use crate::engine::context::MatchContextState;
use crate::models::{HighlightPack, PackMetrics, ScoredEvent, StoryPage};

const COVER_IMAGE: &str = "../assets/cover.jpg";
const CLOSING_IMAGE: &str = "../assets/closing.jpg";

fn utc_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn new_page_id() -> String {
    Uuid::new_v4().to_string()
}

/// Assemble the final pack from the selector's chronological output.
pub fn assemble_pack(
    feed: &MatchFeed,
    highlights: &[ScoredEvent],
    final_state: &MatchContextState,
    players_by_id: &HashMap<String, String>,
    assets: &[AssetDescription],
    config: &ScoringConfig,
) -> HighlightPack {
    let mut pages = Vec::with_capacity(highlights.len() + 2);
    pages.push(make_cover_page(feed, final_state));

    if highlights.is_empty() {
        pages.push(make_no_highlights_page());
    } else {
        for scored in highlights {
            let players = resolve_event_players(scored, players_by_id);
            let image = pick_asset_for_event(&scored.event, &players, assets);
            pages.push(make_highlight_page(scored, image, players));
        }
        pages.push(make_closing_page());
    }

    let highlight_count = pages.iter().filter(|p| p.is_highlight()).count();
    let goal_count = highlights
        .iter()
        .filter(|s| config.is_goal(&s.event.normalized_type()))
        .count();

    HighlightPack {
        pack_id: new_page_id(),
        title: feed.title(),
        pages,
        metrics: PackMetrics { goals: goal_count, highlights: highlight_count },
        source: feed.source.clone(),
        created_at: utc_now_iso(),
    }
}

fn make_cover_page(feed: &MatchFeed, final_state: &MatchContextState) -> StoryPage {
    let date = feed.local_date.as_deref().unwrap_or("Unknown Date");
    StoryPage::Cover {
        id: new_page_id(),
        headline: format!("{} - {}", feed.title(), date),
        image: COVER_IMAGE.to_string(),
        caption: format!(
            "Final score {}-{}",
            final_state.home_goals, final_state.away_goals
        ),
        created_at: utc_now_iso(),
    }
}

fn make_highlight_page(scored: &ScoredEvent, image: String, players: Vec<String>) -> StoryPage {
    let caption = scored
        .event
        .raw
        .get("comment")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();

    StoryPage::Highlight {
        id: new_page_id(),
        minute: scored.event.minute,
        headline: make_headline(scored, &players),
        caption,
        image,
        explanation: scored.explanation(),
        players,
        event_type: scored.event.event_type.clone(),
        created_at: utc_now_iso(),
    }
}

fn make_headline(scored: &ScoredEvent, players: &[String]) -> String {
    let label = match scored.event.normalized_type().as_str() {
        "goal" | "penalty goal" => "GOAL".to_string(),
        "yellow card" => "YELLOW CARD".to_string(),
        "red card" => "RED CARD".to_string(),
        other if !other.is_empty() => title_case(other),
        _ => "Highlight".to_string(),
    };

    if players.is_empty() {
        label
    } else {
        format!("{} — {}", label, players.join(", "))
    }
}

fn make_no_highlights_page() -> StoryPage {
    StoryPage::Info {
        id: new_page_id(),
        headline: "No highlights available".to_string(),
        body: "No events reached the highlight threshold for this match.".to_string(),
        created_at: utc_now_iso(),
    }
}

fn make_closing_page() -> StoryPage {
    StoryPage::Closing {
        id: new_page_id(),
        headline: "Full Time".to_string(),
        image: CLOSING_IMAGE.to_string(),
        created_at: utc_now_iso(),
    }
}

/// Resolve the event's participant references to display names, keeping
/// reference order and dropping duplicates and unknown ids.
fn resolve_event_players(
    scored: &ScoredEvent,
    players_by_id: &HashMap<String, String>,
) -> Vec<String> {
    let mut players: Vec<String> = Vec::new();
    for reference in &scored.event.participants {
        if let Some(name) = resolve_player_name(reference, players_by_id) {
            if !players.iter().any(|existing| existing == name) {
                players.push(name.to_string());
            }
        }
    }
    players
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{select, Normalizer, ScoringEngine};
    use serde_json::json;

    fn feed() -> MatchFeed {
        MatchFeed {
            home_team_id: "t1".to_string(),
            away_team_id: "t2".to_string(),
            home_name: "Celtic".to_string(),
            away_name: "Kilmarnock".to_string(),
            local_date: Some("2024-02-17".to_string()),
            events: vec![
                json!({"type": "goal", "minute": "12", "teamRef1": "t1",
                       "playerRef1": "p1", "comment": "Opens the scoring."}),
                json!({"type": "yellow card", "minute": "30", "teamRef1": "t2"}),
            ],
            source: "test".to_string(),
        }
    }

    fn build(feed: &MatchFeed, top_n: usize) -> HighlightPack {
        let engine = ScoringEngine::new();
        let events = Normalizer::new()
            .with_teams(&feed.home_team_id, &feed.away_team_id)
            .normalize(&feed.events);
        let (scored, state) = engine.score_with_state(&events);
        let selected = select(scored, top_n);

        let mut players = HashMap::new();
        players.insert("p1".to_string(), "Daizen Maeda".to_string());

        assemble_pack(feed, &selected, &state, &players, &[], engine.config())
    }

    #[test]
    fn pack_has_cover_highlights_and_closing() {
        let pack = build(&feed(), 7);
        assert!(matches!(pack.pages[0], StoryPage::Cover { .. }));
        assert!(matches!(pack.pages.last(), Some(StoryPage::Closing { .. })));
        assert_eq!(pack.highlight_count(), 2);
        assert_eq!(pack.metrics.goals, 1);
        assert_eq!(pack.metrics.highlights, 2);
        assert_eq!(pack.title, "Celtic vs Kilmarnock");
    }

    #[test]
    fn cover_carries_final_score_and_date() {
        let pack = build(&feed(), 7);
        let StoryPage::Cover { headline, caption, .. } = &pack.pages[0] else {
            panic!("first page must be the cover");
        };
        assert_eq!(headline, "Celtic vs Kilmarnock - 2024-02-17");
        assert_eq!(caption, "Final score 1-0");
    }

    #[test]
    fn goal_headline_names_the_scorer() {
        let pack = build(&feed(), 7);
        let StoryPage::Highlight { headline, players, explanation, .. } = &pack.pages[1] else {
            panic!("second page must be a highlight");
        };
        assert_eq!(headline, "GOAL — Daizen Maeda");
        assert_eq!(players, &vec!["Daizen Maeda".to_string()]);
        assert!(explanation.starts_with("base=100"));
    }

    #[test]
    fn empty_selection_gets_fallback_page_and_no_closing() {
        let pack = build(&feed(), 0);
        assert_eq!(pack.pages.len(), 2);
        assert!(matches!(pack.pages[1], StoryPage::Info { .. }));
        assert_eq!(pack.metrics.highlights, 0);
    }

    #[test]
    fn title_case_handles_multiword_types() {
        assert_eq!(title_case("attempt saved"), "Attempt Saved");
        assert_eq!(title_case("corner"), "Corner");
    }

    #[test]
    fn placeholder_image_used_without_asset_index() {
        let pack = build(&feed(), 7);
        let StoryPage::Highlight { image, .. } = &pack.pages[1] else {
            panic!("second page must be a highlight");
        };
        assert_eq!(image, crate::assets::PLACEHOLDER_ASSET);
    }
}
