//! Client-side shaping of catalog result pages.

use std::cmp::Ordering;

use super::types::QueryMode;
use crate::catalog::ContentItem;

/// Shape one page of results for display.
///
/// Items without a poster are unusable downstream and are dropped in every
/// mode. Search results additionally get an exact-prefix boost: items whose
/// title starts with the query text (case-insensitive) rank before those
/// that merely contain it, with popularity descending inside each group.
/// The sort is stable, so items equal on both keys keep their upstream
/// order. Discover pages keep the upstream order untouched, since the
/// catalog already sorted them by the requested key.
pub fn process(
    items: Vec<ContentItem>,
    mode: QueryMode,
    query_text: Option<&str>,
) -> Vec<ContentItem> {
    let mut kept: Vec<ContentItem> = items.into_iter().filter(ContentItem::has_poster).collect();

    if mode == QueryMode::Search {
        if let Some(text) = query_text.filter(|t| !t.is_empty()) {
            let needle = text.to_lowercase();
            kept.sort_by(|a, b| {
                let a_prefix = a.title.to_lowercase().starts_with(&needle);
                let b_prefix = b.title.to_lowercase().starts_with(&needle);
                b_prefix
                    .cmp(&a_prefix)
                    .then_with(|| {
                        b.popularity
                            .partial_cmp(&a.popularity)
                            .unwrap_or(Ordering::Equal)
                    })
            });
        }
    }

    kept
}
