use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{browse, content, genres, handlers, middleware, ratings};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Genre taxonomy
        .route("/genres/{kind}", get(genres::list_genres))
        // Browse and search
        .route("/browse/{kind}", get(browse::browse))
        // Per-item content
        .route("/content/{kind}/{id}", get(content::get_overview))
        .route("/content/{kind}/{id}/trailer", get(content::get_trailer))
        .route("/content/{kind}/{id}/similar", get(content::get_similar))
        .route("/content/{kind}/{id}/cast", get(content::get_cast))
        .route("/content/{kind}/{id}/providers", get(content::get_providers))
        // External ratings
        .route("/ratings/{imdb_id}", get(ratings::get_ratings))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
