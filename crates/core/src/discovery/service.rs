//! The discovery service: one request-scoped chain per operation.
//!
//! Every operation here follows the same policy: invalid input fails fast
//! before any I/O, upstream faults degrade to empty results with a warning,
//! and absence (no trailer, no details) is an empty `Option`, not an error.

use std::sync::Arc;

use tracing::warn;

use super::config::DiscoveryConfig;
use super::genres::GenreCache;
use super::postprocess::process;
use super::query::build_query;
use super::trailer::{select_trailer, VideoRecord};
use super::types::{FilterState, MediaKind, QueryMode};
use super::InvalidFilter;
use crate::catalog::{
    CastMember, CatalogGateway, CatalogPage, ContentDetails, ContentItem, Genre, WatchProviders,
};
use crate::metrics::PAGE_RESULTS;

/// Combined detail view for a single item.
///
/// Mirrors what a detail page renders in one shot: the item itself, its
/// best trailer, and its top-billed cast.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContentOverview {
    pub details: ContentDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<VideoRecord>,
    pub cast: Vec<CastMember>,
}

/// Stateless front door to the catalog.
pub struct Discovery {
    gateway: Arc<dyn CatalogGateway>,
    tuning: DiscoveryConfig,
    genre_cache: GenreCache,
}

impl Discovery {
    pub fn new(gateway: Arc<dyn CatalogGateway>, tuning: DiscoveryConfig) -> Self {
        Self {
            gateway,
            tuning,
            genre_cache: GenreCache::new(),
        }
    }

    pub fn tuning(&self) -> &DiscoveryConfig {
        &self.tuning
    }

    /// Browse or search one page of content.
    ///
    /// The only hard failure is a malformed filter-set, rejected before any
    /// network call. An unavailable catalog yields an empty page.
    pub async fn browse(&self, filters: &FilterState) -> Result<CatalogPage, InvalidFilter> {
        let plan = build_query(filters, &self.tuning)?;

        let page = match self.gateway.fetch_page(&plan).await {
            Ok(page) => page,
            Err(e) => {
                warn!(kind = ?plan.kind, mode = ?plan.mode, error = %e, "catalog page fetch failed");
                CatalogPage::empty()
            }
        };

        let results = process(page.results, plan.mode, filters.query_text());

        let mode_label = match plan.mode {
            QueryMode::Discover => "discover",
            QueryMode::Search => "search",
        };
        PAGE_RESULTS
            .with_label_values(&[mode_label])
            .observe(results.len() as f64);

        Ok(CatalogPage {
            results,
            total_pages: page.total_pages,
        })
    }

    /// Pick the best trailer for an item, if any.
    pub async fn trailer(&self, kind: MediaKind, id: u64) -> Option<VideoRecord> {
        match self.gateway.videos(kind, id).await {
            Ok(videos) => select_trailer(&videos).cloned(),
            Err(e) => {
                warn!(kind = ?kind, id, error = %e, "video list fetch failed");
                None
            }
        }
    }

    /// Similar titles, poster-filtered and capped.
    pub async fn similar(&self, kind: MediaKind, id: u64) -> Vec<ContentItem> {
        match self.gateway.similar(kind, id).await {
            Ok(items) => {
                let mut shaped = process(items, QueryMode::Discover, None);
                shaped.truncate(self.tuning.similar_limit);
                shaped
            }
            Err(e) => {
                warn!(kind = ?kind, id, error = %e, "similar titles fetch failed");
                Vec::new()
            }
        }
    }

    /// The genre taxonomy for a kind, memoized for the process lifetime.
    pub async fn genres(&self, kind: MediaKind) -> Vec<Genre> {
        self.genre_cache.get(self.gateway.as_ref(), kind).await
    }

    /// Fetch both genre taxonomies so later lookups hit the memo.
    pub async fn warm_genre_cache(&self) {
        futures::future::join(self.genres(MediaKind::Movie), self.genres(MediaKind::Tv)).await;
    }

    /// Full details for one item.
    pub async fn details(&self, kind: MediaKind, id: u64) -> Option<ContentDetails> {
        match self.gateway.details(kind, id).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!(kind = ?kind, id, error = %e, "details fetch failed");
                None
            }
        }
    }

    /// Top-billed cast, capped.
    pub async fn cast(&self, kind: MediaKind, id: u64) -> Vec<CastMember> {
        match self.gateway.credits(kind, id).await {
            Ok(mut cast) => {
                cast.truncate(self.tuning.cast_limit);
                cast
            }
            Err(e) => {
                warn!(kind = ?kind, id, error = %e, "credits fetch failed");
                Vec::new()
            }
        }
    }

    /// Streaming availability in the configured region.
    pub async fn watch_providers(&self, kind: MediaKind, id: u64) -> WatchProviders {
        match self
            .gateway
            .watch_providers(kind, id, &self.tuning.region)
            .await
        {
            Ok(providers) => providers,
            Err(e) => {
                warn!(kind = ?kind, id, error = %e, "watch providers fetch failed");
                WatchProviders::default()
            }
        }
    }

    /// Everything a detail page needs, fetched concurrently.
    ///
    /// `None` when the item itself cannot be fetched; a missing trailer or
    /// empty cast list does not fail the overview.
    pub async fn overview(&self, kind: MediaKind, id: u64) -> Option<ContentOverview> {
        let (details, trailer, cast) = futures::join!(
            self.details(kind, id),
            self.trailer(kind, id),
            self.cast(kind, id)
        );

        details.map(|details| ContentOverview {
            details,
            trailer,
            cast,
        })
    }
}
