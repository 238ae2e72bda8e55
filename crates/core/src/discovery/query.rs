//! Translation of user-selected filters into upstream catalog queries.

use super::config::DiscoveryConfig;
use super::types::{FilterState, MediaKind, QueryMode, QueryPlan};
use super::InvalidFilter;

/// Build the upstream query for a filter-set.
///
/// A non-empty free-text query selects the search endpoint; otherwise the
/// filter-driven discover endpoint is used. Validation happens here, before
/// any I/O: an inverted year range, a rating outside the 0-10 scale, or a
/// zero page number is rejected.
pub fn build_query(
    filters: &FilterState,
    tuning: &DiscoveryConfig,
) -> Result<QueryPlan, InvalidFilter> {
    validate(filters)?;

    let mut params: Vec<(&'static str, String)> = vec![
        ("language", tuning.locale.clone()),
        ("include_adult", "false".to_string()),
        ("page", filters.page.to_string()),
        ("sort_by", filters.sort.token(filters.kind)),
    ];

    let mode = match filters.query_text() {
        Some(text) => {
            params.push(("query", text.to_string()));
            // Vote filters ride along only when a rating filter is applied
            if filters.min_rating > 0.0 {
                params.push(("vote_average.gte", format_rating(filters.min_rating)));
                params.push(("vote_count.gte", tuning.rated_vote_count_floor.to_string()));
            }
            QueryMode::Search
        }
        None => {
            let floor = if filters.min_rating > 0.0 {
                tuning.rated_vote_count_floor
            } else {
                tuning.vote_count_floor
            };
            params.push(("vote_count.gte", floor.to_string()));

            if filters.min_rating > 0.0 {
                params.push(("vote_average.gte", format_rating(filters.min_rating)));
            }

            if let Some(range) = filters.year_range {
                let (gte_key, lte_key) = date_bound_keys(filters.kind);
                params.push((gte_key, format!("{}-01-01", range.min)));
                params.push((lte_key, format!("{}-12-31", range.max)));
            }

            if let Some(language) = &filters.original_language {
                params.push(("with_original_language", language.clone()));
            }

            if let Some(genre_id) = filters.genre_id.as_deref().filter(|g| !g.is_empty()) {
                params.push(("with_genres", genre_id.to_string()));
            }

            QueryMode::Discover
        }
    };

    Ok(QueryPlan {
        mode,
        kind: filters.kind,
        params,
    })
}

fn validate(filters: &FilterState) -> Result<(), InvalidFilter> {
    if !(0.0..=10.0).contains(&filters.min_rating) {
        return Err(InvalidFilter::RatingOutOfRange(filters.min_rating));
    }
    if let Some(range) = filters.year_range {
        if range.min > range.max {
            return Err(InvalidFilter::YearRangeInverted {
                min: range.min,
                max: range.max,
            });
        }
    }
    if filters.page == 0 {
        return Err(InvalidFilter::PageZero);
    }
    Ok(())
}

fn date_bound_keys(kind: MediaKind) -> (&'static str, &'static str) {
    match kind {
        MediaKind::Movie => ("primary_release_date.gte", "primary_release_date.lte"),
        MediaKind::Tv => ("first_air_date.gte", "first_air_date.lte"),
    }
}

fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}
