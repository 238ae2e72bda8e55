//! External ratings API handler.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::warn;

use marquee_core::Ratings;

use super::handlers::ErrorResponse;
use crate::state::AppState;

/// GET /api/v1/ratings/{imdb_id}
///
/// IMDb and Rotten Tomatoes ratings for a title. An upstream fault
/// degrades to an empty ratings object; only a missing API key is an
/// error.
pub async fn get_ratings(
    State(state): State<Arc<AppState>>,
    Path(imdb_id): Path<String>,
) -> Result<Json<Ratings>, impl IntoResponse> {
    let Some(client) = state.ratings() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Ratings gateway not configured".to_string(),
            }),
        ));
    };

    match client.ratings_by_imdb_id(&imdb_id).await {
        Ok(ratings) => Ok(Json(ratings)),
        Err(e) => {
            warn!(imdb_id = %imdb_id, error = %e, "ratings lookup failed");
            Ok(Json(Ratings::default()))
        }
    }
}
