//! Per-item content API handlers: details, trailer, similar, cast,
//! watch providers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use marquee_core::{
    CastMember, ContentItem, ContentOverview, MediaKind, VideoRecord, WatchProviders,
};

use super::handlers::ErrorResponse;
use crate::state::AppState;

/// GET /api/v1/content/{kind}/{id}
///
/// Combined detail view: item details, best trailer, top-billed cast.
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(MediaKind, u64)>,
) -> Result<Json<ContentOverview>, impl IntoResponse> {
    match state.discovery().overview(kind, id).await {
        Some(overview) => Ok(Json(overview)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("{} not found: {}", kind.path_segment(), id),
            }),
        )),
    }
}

/// GET /api/v1/content/{kind}/{id}/trailer
///
/// Best available trailer, or null when none qualifies.
pub async fn get_trailer(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(MediaKind, u64)>,
) -> Json<Option<VideoRecord>> {
    Json(state.discovery().trailer(kind, id).await)
}

/// GET /api/v1/content/{kind}/{id}/similar
///
/// Similar titles with displayable posters.
pub async fn get_similar(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(MediaKind, u64)>,
) -> Json<Vec<ContentItem>> {
    Json(state.discovery().similar(kind, id).await)
}

/// GET /api/v1/content/{kind}/{id}/cast
///
/// Top-billed cast members.
pub async fn get_cast(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(MediaKind, u64)>,
) -> Json<Vec<CastMember>> {
    Json(state.discovery().cast(kind, id).await)
}

/// GET /api/v1/content/{kind}/{id}/providers
///
/// Streaming/rental/purchase availability in the configured region.
pub async fn get_providers(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(MediaKind, u64)>,
) -> Json<WatchProviders> {
    Json(state.discovery().watch_providers(kind, id).await)
}
