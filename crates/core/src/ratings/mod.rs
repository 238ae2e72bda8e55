//! Ratings gateway: third-party ratings lookup (OMDB).
//!
//! The core does not interpret rating values; it fetches and shapes them
//! for the display layer. Absence of a rating is an empty field, not an
//! error.

mod omdb;

pub use omdb::{OmdbClient, OmdbConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the ratings gateway.
#[derive(Debug, Error)]
pub enum RatingsError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

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

/// External ratings for one title.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ratings {
    /// IMDb rating, e.g. "8.7/10".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    /// Rotten Tomatoes rating, e.g. "83%".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotten_tomatoes: Option<String>,
}

impl Ratings {
    /// Whether any source returned a value.
    pub fn is_empty(&self) -> bool {
        self.imdb.is_none() && self.rotten_tomatoes.is_none()
    }
}
