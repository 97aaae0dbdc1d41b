//! Squad files: player id -> display name resolution.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Parse a squad document into a `player_id -> "First Last"` map.
///
/// Expected shape: `{"squad": [{"person": [...]}]}`. Non-player persons and
/// entries without an id or any name are skipped. Malformed documents yield
/// an empty map, never an error - an unresolvable name only downgrades the
/// pack's headlines.
pub fn parse_squad_players(value: &Value) -> HashMap<String, String> {
    let mut players_by_id = HashMap::new();

    let persons = value
        .get("squad")
        .and_then(Value::as_array)
        .and_then(|squad| squad.first())
        .and_then(|entry| entry.get("person"))
        .and_then(Value::as_array);

    let Some(persons) = persons else {
        return players_by_id;
    };

    for person in persons {
        if person.get("type").and_then(Value::as_str) != Some("player") {
            continue;
        }
        let Some(player_id) = person.get("id").and_then(Value::as_str) else {
            continue;
        };
        let first = person.get("firstName").and_then(Value::as_str).unwrap_or("").trim();
        let last = person.get("lastName").and_then(Value::as_str).unwrap_or("").trim();
        if first.is_empty() && last.is_empty() {
            continue;
        }
        let full_name = format!("{} {}", first, last).trim().to_string();
        players_by_id.insert(player_id.to_string(), full_name);
    }

    players_by_id
}

/// Load a squad JSON file into the id -> name map.
pub fn load_squad_players(path: &Path) -> Result<HashMap<String, String>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let players = parse_squad_players(&value);
    log::debug!("loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Display name for a player reference, if the squads know it.
pub fn resolve_player_name<'a>(
    player_id: &str,
    players_by_id: &'a HashMap<String, String>,
) -> Option<&'a str> {
    players_by_id.get(player_id).map(String::as_str)
}
