//! Domain types for catalog gateway responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single movie or TV entry from a discover/search/similar response.
///
/// Movie rows and TV rows use different upstream field names (`title` vs
/// `name`, `release_date` vs `first_air_date`); both normalize into this
/// shape. Fields the discovery core does not interpret ride along in
/// `extra` untouched, for consumers that render them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Catalog ID.
    pub id: u64,
    /// Display title (movie title or series name).
    pub title: String,
    /// Poster path (relative to the image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Release date for movies, first air date for TV (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Average vote (0-10).
    #[serde(default)]
    pub vote_average: f32,
    /// Upstream popularity score.
    #[serde(default)]
    pub popularity: f32,
    /// Uninterpreted upstream fields, passed through to the display layer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentItem {
    /// Whether the item has a displayable poster.
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogPage {
    /// Items on this page.
    pub results: Vec<ContentItem>,
    /// Total pages available upstream for this query.
    pub total_pages: u32,
}

impl CatalogPage {
    /// An empty page, used when the upstream catalog is unavailable.
    pub fn empty() -> Self {
        Self {
            results: vec![],
            total_pages: 0,
        }
    }
}

/// A genre from the catalog's taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Catalog genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Full details for a single movie or TV series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentDetails {
    /// Catalog ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Release date for movies, first air date for TV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Runtime in minutes (movies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    /// Number of seasons (TV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<u32>,
    /// Number of episodes (TV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_episodes: Option<u32>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Genre names.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// IMDb ID, when the catalog exposes one (enables ratings lookups).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

/// A cast member from a credits response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMember {
    /// Actor name.
    pub name: String,
    /// Character played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Profile image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
}

/// Streaming availability for one region, grouped by acquisition model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchProviders {
    /// Subscription streaming.
    #[serde(default)]
    pub stream: Vec<WatchProvider>,
    /// Rental.
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    /// Purchase.
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
}

/// A single streaming/rental/purchase provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchProvider {
    /// Provider display name.
    pub provider_name: String,
    /// Provider logo path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
}
