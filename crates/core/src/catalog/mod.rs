//! Catalog gateway: the external movie/TV metadata and discovery API.
//!
//! The discovery core treats the catalog as an opaque, potentially-failing
//! remote collaborator. This module defines the gateway trait and the TMDB
//! client that implements it.

mod tmdb;
mod types;

pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::discovery::{MediaKind, QueryPlan, VideoRecord};

/// Errors that can occur when talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for catalog backends.
///
/// Implemented by `TmdbClient` and by `MockCatalog` in `testing`, so the
/// discovery service can run against either.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Execute a built discover/search query and return one result page.
    async fn fetch_page(&self, plan: &QueryPlan) -> Result<CatalogPage, CatalogError>;

    /// List videos (trailers, teasers, clips) attached to an item.
    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<VideoRecord>, CatalogError>;

    /// List items similar to the given one.
    async fn similar(&self, kind: MediaKind, id: u64) -> Result<Vec<ContentItem>, CatalogError>;

    /// Fetch the genre taxonomy for a media kind.
    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>, CatalogError>;

    /// Fetch full details for a single item.
    async fn details(&self, kind: MediaKind, id: u64) -> Result<ContentDetails, CatalogError>;

    /// Fetch the cast list for an item.
    async fn credits(&self, kind: MediaKind, id: u64) -> Result<Vec<CastMember>, CatalogError>;

    /// Fetch streaming/rental/purchase availability for one region.
    async fn watch_providers(
        &self,
        kind: MediaKind,
        id: u64,
        region: &str,
    ) -> Result<WatchProviders, CatalogError>;
}
