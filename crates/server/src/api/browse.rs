//! Browse/search API handler.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use marquee_core::{CatalogPage, FilterState, MediaKind, SortKey, YearRange};

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    /// Free-text query; presence switches to search mode.
    #[serde(default)]
    pub query: Option<String>,
    /// Genre ID filter.
    #[serde(default)]
    pub genre: Option<String>,
    /// Lower bound of the year range.
    #[serde(default)]
    pub year_from: Option<i32>,
    /// Upper bound of the year range.
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Original-language filter (ISO 639-1).
    #[serde(default)]
    pub language: Option<String>,
    /// Minimum average vote.
    #[serde(default)]
    pub min_rating: Option<f32>,
    /// Result ordering.
    #[serde(default)]
    pub sort: Option<SortKey>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
}

impl BrowseParams {
    fn into_filters(self, kind: MediaKind) -> FilterState {
        // One-sided year bounds are completed from the widest range.
        let year_range = match (self.year_from, self.year_to) {
            (None, None) => None,
            (from, to) => {
                let open = YearRange::unrestricted();
                Some(YearRange::new(
                    from.unwrap_or(open.min),
                    to.unwrap_or(open.max),
                ))
            }
        };

        FilterState {
            kind,
            genre_id: self.genre,
            year_range,
            original_language: self.language,
            min_rating: self.min_rating.unwrap_or(0.0),
            sort: self.sort.unwrap_or_default(),
            query: self.query,
            page: self.page.unwrap_or(1),
        }
    }
}

/// GET /api/v1/browse/{kind}
///
/// Browse by filters, or search when a free-text query is present.
pub async fn browse(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<MediaKind>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<CatalogPage>, impl IntoResponse> {
    let filters = params.into_filters(kind);

    match state.discovery().browse(&filters).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
