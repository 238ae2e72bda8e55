//! Genre taxonomy API handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use marquee_core::{Genre, MediaKind};

use crate::state::AppState;

/// GET /api/v1/genres/{kind}
///
/// The genre taxonomy for movies or TV, memoized for the process lifetime.
pub async fn list_genres(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<MediaKind>,
) -> Json<Vec<Genre>> {
    Json(state.discovery().genres(kind).await)
}
