//! OMDB API client for IMDb and Rotten Tomatoes ratings.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Ratings, RatingsError};
use crate::metrics::RATINGS_REQUESTS;

/// OMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// OMDB API key (required).
    pub api_key: String,
    /// Base URL (default: http://www.omdbapi.com).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}

/// OMDB API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDB client.
    pub fn new(config: OmdbConfig) -> Result<Self, RatingsError> {
        if config.api_key.is_empty() {
            return Err(RatingsError::NotConfigured(
                "OMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "http://www.omdbapi.com".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Look up ratings by IMDb ID.
    pub async fn ratings_by_imdb_id(&self, imdb_id: &str) -> Result<Ratings, RatingsError> {
        self.fetch(&[("i", imdb_id.to_string())]).await
    }

    /// Look up ratings by title, optionally narrowed by year.
    pub async fn ratings_by_title(
        &self,
        title: &str,
        year: Option<u32>,
    ) -> Result<Ratings, RatingsError> {
        let mut params = vec![("t", title.to_string())];
        if let Some(y) = year {
            params.push(("y", y.to_string()));
        }
        self.fetch(&params).await
    }

    async fn fetch(&self, params: &[(&'static str, String)]) -> Result<Ratings, RatingsError> {
        debug!(?params, "OMDB request");

        let result = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                RATINGS_REQUESTS.with_label_values(&["error"]).inc();
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            RATINGS_REQUESTS.with_label_values(&["error"]).inc();
            let body = response.text().await.unwrap_or_default();
            return Err(RatingsError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        RATINGS_REQUESTS.with_label_values(&["success"]).inc();

        let payload: OmdbResponse = response
            .json()
            .await
            .map_err(|e| RatingsError::ParseError(format!("Failed to parse response: {}", e)))?;

        Ok(payload.into())
    }
}

// ============================================================================
// OMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Ratings", default)]
    ratings: Vec<OmdbRating>,
}

#[derive(Debug, Deserialize)]
struct OmdbRating {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Value")]
    value: String,
}

impl From<OmdbResponse> for Ratings {
    fn from(r: OmdbResponse) -> Self {
        let mut ratings = Ratings::default();
        for entry in r.ratings {
            match entry.source.as_str() {
                "Internet Movie Database" => ratings.imdb = Some(entry.value),
                "Rotten Tomatoes" => ratings.rotten_tomatoes = Some(entry.value),
                _ => {}
            }
        }
        ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_parsed_from_sources() {
        let json = r#"{
            "Title": "Inception",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.8/10"},
                {"Source": "Rotten Tomatoes", "Value": "87%"},
                {"Source": "Metacritic", "Value": "74/100"}
            ]
        }"#;

        let response: OmdbResponse = serde_json::from_str(json).unwrap();
        let ratings: Ratings = response.into();
        assert_eq!(ratings.imdb.as_deref(), Some("8.8/10"));
        assert_eq!(ratings.rotten_tomatoes.as_deref(), Some("87%"));
    }

    #[test]
    fn test_missing_ratings_array() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let response: OmdbResponse = serde_json::from_str(json).unwrap();
        let ratings: Ratings = response.into();
        assert!(ratings.is_empty());
    }

    #[test]
    fn test_new_rejects_empty_api_key() {
        let config = OmdbConfig {
            api_key: String::new(),
            base_url: None,
            timeout_secs: 30,
        };
        assert!(matches!(
            OmdbClient::new(config),
            Err(RatingsError::NotConfigured(_))
        ));
    }
}
