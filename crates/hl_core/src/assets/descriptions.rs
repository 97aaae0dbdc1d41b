use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// One entry of the asset description index.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDescription {
    pub filename: String,
    pub description: String,
    /// Cached lowercase description for matching.
    description_lower: String,
}

impl AssetDescription {
    pub fn description_lower(&self) -> &str {
        &self.description_lower
    }
}

/// Parse an asset description index from its JSON form.
///
/// Accepts either a bare array or a `{"assets": [...]}` wrapper. Entries
/// with a blank filename or description are skipped, not errors.
pub fn parse_asset_descriptions(value: &Value) -> Vec<AssetDescription> {
    let entries = match value {
        Value::Object(map) => map.get("assets").and_then(Value::as_array),
        Value::Array(_) => value.as_array(),
        _ => None,
    };

    entries
        .map(|items| items.iter().filter_map(parse_entry).collect())
        .unwrap_or_default()
}

fn parse_entry(item: &Value) -> Option<AssetDescription> {
    let filename = item.get("filename")?.as_str()?.trim().to_string();
    let description = item.get("description")?.as_str()?.trim().to_string();
    if filename.is_empty() || description.is_empty() {
        return None;
    }
    let description_lower = description.to_lowercase();
    Some(AssetDescription { filename, description, description_lower })
}

/// Load the description index from a JSON file.
pub fn load_asset_descriptions(path: &Path) -> Result<Vec<AssetDescription>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let descriptions = parse_asset_descriptions(&value);
    log::debug!("loaded {} asset descriptions from {}", descriptions.len(), path.display());
    Ok(descriptions)
}
