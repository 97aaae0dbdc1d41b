//! Highlight Selector
//!
//! Picks the top-N positively scored events and reorders them for
//! presentation. Ranking order (score) and presentation order (chronology)
//! are deliberately different passes over the same set.

use crate::models::ScoredEvent;

/// Select the top `top_n` highlights from a scored sequence.
///
/// 1. Drop events with `total_score == 0` - the sole exclusion rule.
/// 2. Rank by total score descending, ties by `original_index` ascending
///    (earlier input position wins), so the ranking is reproducible.
/// 3. Truncate to `top_n`.
/// 4. Re-sort the chosen subset chronologically.
///
/// `top_n == 0` yields an empty sequence; so does a scored sequence with no
/// positive totals. The caller substitutes fallback content in that case.
pub fn select(scored: Vec<ScoredEvent>, top_n: usize) -> Vec<ScoredEvent> {
    let mut ranked: Vec<ScoredEvent> =
        scored.into_iter().filter(|s| s.total_score > 0).collect();

    ranked.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then(a.event.original_index.cmp(&b.event.original_index))
    });
    ranked.truncate(top_n);

    tracing::debug!(selected = ranked.len(), top_n, "highlight selection complete");

    ranked.sort_by_key(|s| s.event.sort_key());
    ranked
}
