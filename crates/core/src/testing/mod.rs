//! Testing utilities and mock implementations.
//!
//! This module provides a mock catalog gateway so the discovery service
//! and the HTTP API can be tested end-to-end without real infrastructure.

mod mock_catalog;

pub use mock_catalog::MockCatalog;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::Map;

    use crate::catalog::{CatalogPage, ContentDetails, ContentItem};
    use crate::discovery::{VideoKind, VideoRecord};

    /// A content item with sensible defaults.
    pub fn content_item(id: u64, title: &str, poster: Option<&str>) -> ContentItem {
        ContentItem {
            id,
            title: title.to_string(),
            poster_path: poster.map(str::to_string),
            release_date: Some("2020-01-01".to_string()),
            vote_average: 7.0,
            popularity: 10.0,
            extra: Map::new(),
        }
    }

    /// A content item with an explicit popularity, for ranking tests.
    pub fn ranked_item(id: u64, title: &str, popularity: f32) -> ContentItem {
        let mut item = content_item(id, title, Some("/poster.jpg"));
        item.popularity = popularity;
        item
    }

    /// A one-page catalog response.
    pub fn single_page(results: Vec<ContentItem>) -> CatalogPage {
        CatalogPage {
            results,
            total_pages: 1,
        }
    }

    /// Content details with sensible defaults.
    pub fn content_details(id: u64, title: &str) -> ContentDetails {
        ContentDetails {
            id,
            title: title.to_string(),
            overview: Some("An overview.".to_string()),
            release_date: Some("2020-01-01".to_string()),
            runtime_minutes: Some(120),
            number_of_seasons: None,
            number_of_episodes: None,
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            genres: vec!["Action".to_string()],
            vote_average: Some(7.5),
            imdb_id: Some("tt0000001".to_string()),
        }
    }

    /// A YouTube video record.
    pub fn youtube_video(kind: VideoKind, name: &str) -> VideoRecord {
        VideoRecord {
            site: "YouTube".to_string(),
            kind,
            name: name.to_string(),
            key: "dQw4w9WgXcQ".to_string(),
        }
    }
}
