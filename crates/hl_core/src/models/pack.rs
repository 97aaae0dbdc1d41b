use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single page of the final pack.
///
/// Tagged by `type` so viewers can dispatch on it directly. Extra fields on
/// highlight pages (`explanation`, `players`, `event_type`) exist for
/// debugging and explainability; the viewer only reads the display fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoryPage {
    Cover {
        id: String,
        headline: String,
        image: String,
        caption: String,
        created_at: String,
    },
    Highlight {
        id: String,
        minute: u32,
        headline: String,
        caption: String,
        image: String,
        explanation: String,
        players: Vec<String>,
        event_type: String,
        created_at: String,
    },
    /// Substitute content when no event scored above zero.
    Info {
        id: String,
        headline: String,
        body: String,
        created_at: String,
    },
    /// Fixed closing page, appended last when any highlights exist.
    Closing {
        id: String,
        headline: String,
        image: String,
        created_at: String,
    },
}

impl StoryPage {
    pub fn is_highlight(&self) -> bool {
        matches!(self, StoryPage::Highlight { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PackMetrics {
    /// Number of highlight pages derived from goal-class events.
    pub goals: usize,
    /// Total number of highlight pages.
    pub highlights: usize,
}

/// The final artifact: an ordered sequence of pages plus pack metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct HighlightPack {
    pub pack_id: String,
    pub title: String,
    pub pages: Vec<StoryPage>,
    pub metrics: PackMetrics,
    /// Path or label of the event feed this pack was built from.
    pub source: String,
    pub created_at: String,
}

impl HighlightPack {
    pub fn highlight_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_highlight()).count()
    }
}
