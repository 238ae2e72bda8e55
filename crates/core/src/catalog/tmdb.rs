//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::types::{
    CastMember, CatalogPage, ContentDetails, ContentItem, Genre, WatchProvider, WatchProviders,
};
use super::{CatalogError, CatalogGateway};
use crate::discovery::{MediaKind, QueryMode, QueryPlan, VideoRecord};
use crate::metrics::{CATALOG_REQUESTS, CATALOG_REQUEST_DURATION};

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image base URL for posters/backdrops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// Locale sent with per-item lookups (default: en-US).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    image_base_url: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        let image_base_url = config
            .image_base_url
            .unwrap_or_else(|| "https://image.tmdb.org/t/p".to_string());

        let language = config.language.unwrap_or_else(|| "en-US".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            language,
            image_base_url,
        })
    }

    /// Absolute URL for a poster/backdrop path at the given width preset.
    pub fn image_url(&self, path: &str, width: &str) -> String {
        format!("{}/{}{}", self.base_url_for_images(), width, path)
    }

    fn base_url_for_images(&self) -> &str {
        self.image_base_url.trim_end_matches('/')
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        operation: &'static str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(operation, path, "TMDB request");

        let timer = CATALOG_REQUEST_DURATION
            .with_label_values(&[operation])
            .start_timer();

        let result = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await;

        timer.observe_duration();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                CATALOG_REQUESTS
                    .with_label_values(&[operation, "error"])
                    .inc();
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            CATALOG_REQUESTS
                .with_label_values(&[operation, "error"])
                .inc();
            if status == 401 {
                return Err(CatalogError::NotConfigured(
                    "Invalid TMDB API key".to_string(),
                ));
            }
            if status == 404 {
                return Err(CatalogError::NotFound(path.to_string()));
            }
            if status == 429 {
                return Err(CatalogError::RateLimitExceeded);
            }
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        CATALOG_REQUESTS
            .with_label_values(&[operation, "success"])
            .inc();

        response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse {} response: {}", operation, e))
        })
    }

    fn locale_params(&self) -> Vec<(&'static str, String)> {
        vec![("language", self.language.clone())]
    }
}

#[async_trait]
impl CatalogGateway for TmdbClient {
    async fn fetch_page(&self, plan: &QueryPlan) -> Result<CatalogPage, CatalogError> {
        let family = match plan.mode {
            QueryMode::Discover => "discover",
            QueryMode::Search => "search",
        };
        let path = format!("/{}/{}", family, plan.kind.path_segment());

        match plan.kind {
            MediaKind::Movie => {
                let response: PageResponse<MovieRow> =
                    self.get_json(&path, &plan.params, "fetch_page").await?;
                Ok(response.into())
            }
            MediaKind::Tv => {
                let response: PageResponse<TvRow> =
                    self.get_json(&path, &plan.params, "fetch_page").await?;
                Ok(response.into())
            }
        }
    }

    async fn videos(&self, kind: MediaKind, id: u64) -> Result<Vec<VideoRecord>, CatalogError> {
        let path = format!("/{}/{}/videos", kind.path_segment(), id);
        let response: VideoListResponse = self
            .get_json(&path, &self.locale_params(), "videos")
            .await?;
        Ok(response.results)
    }

    async fn similar(&self, kind: MediaKind, id: u64) -> Result<Vec<ContentItem>, CatalogError> {
        let path = format!("/{}/{}/similar", kind.path_segment(), id);
        let mut params = self.locale_params();
        params.push(("page", "1".to_string()));

        match kind {
            MediaKind::Movie => {
                let response: PageResponse<MovieRow> =
                    self.get_json(&path, &params, "similar").await?;
                Ok(response.results.into_iter().map(Into::into).collect())
            }
            MediaKind::Tv => {
                let response: PageResponse<TvRow> =
                    self.get_json(&path, &params, "similar").await?;
                Ok(response.results.into_iter().map(Into::into).collect())
            }
        }
    }

    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>, CatalogError> {
        let path = format!("/genre/{}/list", kind.path_segment());
        let response: GenreListResponse = self
            .get_json(&path, &self.locale_params(), "genres")
            .await?;
        Ok(response.genres)
    }

    async fn details(&self, kind: MediaKind, id: u64) -> Result<ContentDetails, CatalogError> {
        let path = format!("/{}/{}", kind.path_segment(), id);
        match kind {
            MediaKind::Movie => {
                let row: MovieDetailsRow = self
                    .get_json(&path, &self.locale_params(), "details")
                    .await?;
                Ok(row.into())
            }
            MediaKind::Tv => {
                let mut params = self.locale_params();
                // TV responses keep the IMDb ID under external_ids.
                params.push(("append_to_response", "external_ids".to_string()));
                let row: TvDetailsRow = self.get_json(&path, &params, "details").await?;
                Ok(row.into())
            }
        }
    }

    async fn credits(&self, kind: MediaKind, id: u64) -> Result<Vec<CastMember>, CatalogError> {
        let path = format!("/{}/{}/credits", kind.path_segment(), id);
        let response: CreditsResponse = self
            .get_json(&path, &self.locale_params(), "credits")
            .await?;
        Ok(response.cast)
    }

    async fn watch_providers(
        &self,
        kind: MediaKind,
        id: u64,
        region: &str,
    ) -> Result<WatchProviders, CatalogError> {
        let path = format!("/{}/{}/watch/providers", kind.path_segment(), id);
        let response: ProvidersResponse = self.get_json(&path, &[], "watch_providers").await?;

        let entry = response.results.get(region).cloned().unwrap_or_default();
        Ok(WatchProviders {
            stream: entry.flatrate,
            rent: entry.rent,
            buy: entry.buy,
        })
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct PageResponse<T> {
    results: Vec<T>,
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: u64,
    title: String,
    release_date: Option<String>,
    poster_path: Option<String>,
    #[serde(default)]
    vote_average: f32,
    #[serde(default)]
    popularity: f32,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct TvRow {
    id: u64,
    name: String,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    #[serde(default)]
    vote_average: f32,
    #[serde(default)]
    popularity: f32,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    results: Vec<VideoRecord>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct MovieDetailsRow {
    id: u64,
    title: String,
    overview: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(default)]
    genres: Vec<GenreName>,
    vote_average: Option<f32>,
    imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TvDetailsRow {
    id: u64,
    name: String,
    overview: Option<String>,
    first_air_date: Option<String>,
    number_of_seasons: Option<u32>,
    number_of_episodes: Option<u32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(default)]
    genres: Vec<GenreName>,
    vote_average: Option<f32>,
    #[serde(default)]
    external_ids: ExternalIds,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalIds {
    imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreName {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
struct ProvidersResponse {
    #[serde(default)]
    results: std::collections::HashMap<String, RegionProviders>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RegionProviders {
    #[serde(default)]
    flatrate: Vec<WatchProvider>,
    #[serde(default)]
    rent: Vec<WatchProvider>,
    #[serde(default)]
    buy: Vec<WatchProvider>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<MovieRow> for ContentItem {
    fn from(r: MovieRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            poster_path: r.poster_path,
            release_date: r.release_date.filter(|d| !d.is_empty()),
            vote_average: r.vote_average,
            popularity: r.popularity,
            extra: r.extra,
        }
    }
}

impl From<TvRow> for ContentItem {
    fn from(r: TvRow) -> Self {
        Self {
            id: r.id,
            title: r.name,
            poster_path: r.poster_path,
            release_date: r.first_air_date.filter(|d| !d.is_empty()),
            vote_average: r.vote_average,
            popularity: r.popularity,
            extra: r.extra,
        }
    }
}

impl<T: Into<ContentItem>> From<PageResponse<T>> for CatalogPage {
    fn from(r: PageResponse<T>) -> Self {
        Self {
            results: r.results.into_iter().map(Into::into).collect(),
            total_pages: r.total_pages,
        }
    }
}

impl From<MovieDetailsRow> for ContentDetails {
    fn from(d: MovieDetailsRow) -> Self {
        Self {
            id: d.id,
            title: d.title,
            overview: d.overview,
            release_date: d.release_date.filter(|r| !r.is_empty()),
            runtime_minutes: d.runtime,
            number_of_seasons: None,
            number_of_episodes: None,
            poster_path: d.poster_path,
            backdrop_path: d.backdrop_path,
            genres: d.genres.into_iter().map(|g| g.name).collect(),
            vote_average: d.vote_average,
            imdb_id: d.imdb_id,
        }
    }
}

impl From<TvDetailsRow> for ContentDetails {
    fn from(d: TvDetailsRow) -> Self {
        Self {
            id: d.id,
            title: d.name,
            overview: d.overview,
            release_date: d.first_air_date.filter(|r| !r.is_empty()),
            runtime_minutes: None,
            number_of_seasons: d.number_of_seasons,
            number_of_episodes: d.number_of_episodes,
            poster_path: d.poster_path,
            backdrop_path: d.backdrop_path,
            genres: d.genres.into_iter().map(|g| g.name).collect(),
            vote_average: d.vote_average,
            imdb_id: d.external_ids.imdb_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_row_conversion() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "release_date": "1999-03-30",
            "poster_path": "/poster.jpg",
            "vote_average": 8.2,
            "popularity": 81.4,
            "overview": "A computer hacker..."
        }"#;

        let row: MovieRow = serde_json::from_str(json).unwrap();
        let item: ContentItem = row.into();
        assert_eq!(item.id, 603);
        assert_eq!(item.title, "The Matrix");
        assert_eq!(item.year(), Some(1999));
        assert_eq!(
            item.extra.get("overview").and_then(|v| v.as_str()),
            Some("A computer hacker...")
        );
    }

    #[test]
    fn test_tv_row_normalizes_field_names() {
        let json = r#"{
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "poster_path": "/poster.jpg",
            "vote_average": 9.5,
            "popularity": 245.0
        }"#;

        let row: TvRow = serde_json::from_str(json).unwrap();
        let item: ContentItem = row.into();
        assert_eq!(item.title, "Breaking Bad");
        assert_eq!(item.release_date.as_deref(), Some("2008-01-20"));
    }

    #[test]
    fn test_empty_date_normalized_to_none() {
        let json = r#"{"id": 1, "title": "Undated", "release_date": ""}"#;
        let row: MovieRow = serde_json::from_str(json).unwrap();
        let item: ContentItem = row.into();
        assert!(item.release_date.is_none());
    }

    #[test]
    fn test_movie_details_conversion() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A computer hacker...",
            "release_date": "1999-03-30",
            "runtime": 136,
            "poster_path": "/poster.jpg",
            "backdrop_path": null,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "vote_average": 8.2,
            "imdb_id": "tt0133093"
        }"#;

        let row: MovieDetailsRow = serde_json::from_str(json).unwrap();
        let details: ContentDetails = row.into();
        assert_eq!(details.runtime_minutes, Some(136));
        assert_eq!(details.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(details.imdb_id.as_deref(), Some("tt0133093"));
        assert!(details.number_of_seasons.is_none());
    }

    #[test]
    fn test_tv_details_imdb_id_from_external_ids() {
        let json = r#"{
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "number_of_seasons": 5,
            "number_of_episodes": 62,
            "external_ids": {"imdb_id": "tt0903747"}
        }"#;

        let row: TvDetailsRow = serde_json::from_str(json).unwrap();
        let details: ContentDetails = row.into();
        assert_eq!(details.number_of_seasons, Some(5));
        assert_eq!(details.imdb_id.as_deref(), Some("tt0903747"));
        assert!(details.runtime_minutes.is_none());
    }

    #[test]
    fn test_providers_response_missing_region() {
        let json = r#"{"results": {"GB": {"flatrate": [{"provider_name": "Netflix"}]}}}"#;
        let response: ProvidersResponse = serde_json::from_str(json).unwrap();
        let entry = response.results.get("US").cloned().unwrap_or_default();
        assert!(entry.flatrate.is_empty());
    }

    #[test]
    fn test_new_rejects_empty_api_key() {
        let config = TmdbConfig {
            api_key: String::new(),
            base_url: None,
            image_base_url: None,
            language: None,
            timeout_secs: 30,
        };
        assert!(matches!(
            TmdbClient::new(config),
            Err(CatalogError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_image_url() {
        let config = TmdbConfig {
            api_key: "k".to_string(),
            base_url: None,
            image_base_url: None,
            language: None,
            timeout_secs: 30,
        };
        let client = TmdbClient::new(config).unwrap();
        assert_eq!(
            client.image_url("/poster.jpg", "w500"),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
    }
}
