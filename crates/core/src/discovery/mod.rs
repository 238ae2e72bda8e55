//! Content discovery core.
//!
//! Three small, pure components plus the service that chains them around
//! the catalog gateway: the query builder translates user filters into an
//! upstream query, the post-processor shapes result pages for display, and
//! the trailer selector picks one video per item by a fixed fallback
//! policy.

mod config;
mod genres;
mod postprocess;
mod query;
mod service;
mod trailer;
mod types;

pub use config::DiscoveryConfig;
pub use genres::GenreCache;
pub use postprocess::process;
pub use query::build_query;
pub use service::{ContentOverview, Discovery};
pub use trailer::{select_trailer, VideoKind, VideoRecord};
pub use types::*;

use thiserror::Error;

/// A malformed filter-set, rejected before any network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidFilter {
    /// Year range minimum is after its maximum.
    #[error("year range minimum {min} is after maximum {max}")]
    YearRangeInverted { min: i32, max: i32 },

    /// Minimum rating outside the 0-10 vote scale.
    #[error("minimum rating {0} is outside the 0-10 scale")]
    RatingOutOfRange(f32),

    /// Pages are 1-based.
    #[error("page numbers start at 1")]
    PageZero,
}
