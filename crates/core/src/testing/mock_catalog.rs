//! Mock catalog gateway for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{
    CastMember, CatalogError, CatalogGateway, CatalogPage, ContentDetails, ContentItem, Genre,
    WatchProviders,
};
use crate::discovery::{MediaKind, QueryPlan, VideoRecord};

/// Mock implementation of the `CatalogGateway` trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable pages, videos, genres, details
/// - Record executed query plans for assertions
/// - Simulate a one-shot upstream failure
#[derive(Debug, Default)]
pub struct MockCatalog {
    page: Arc<RwLock<Option<CatalogPage>>>,
    videos: Arc<RwLock<Vec<VideoRecord>>>,
    similar: Arc<RwLock<Vec<ContentItem>>>,
    movie_genres: Arc<RwLock<Vec<Genre>>>,
    tv_genres: Arc<RwLock<Vec<Genre>>>,
    details: Arc<RwLock<Option<ContentDetails>>>,
    cast: Arc<RwLock<Vec<CastMember>>>,
    providers: Arc<RwLock<WatchProviders>>,
    plans: Arc<RwLock<Vec<QueryPlan>>>,
    genre_call_count: AtomicUsize,
    fail_next: Arc<RwLock<bool>>,
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page returned by `fetch_page`.
    pub async fn set_page(&self, page: CatalogPage) {
        *self.page.write().await = Some(page);
    }

    /// Set the videos returned by `videos`.
    pub async fn set_videos(&self, videos: Vec<VideoRecord>) {
        *self.videos.write().await = videos;
    }

    /// Set the items returned by `similar`.
    pub async fn set_similar(&self, items: Vec<ContentItem>) {
        *self.similar.write().await = items;
    }

    /// Set the genre list for a kind.
    pub async fn set_genres(&self, kind: MediaKind, genres: Vec<Genre>) {
        match kind {
            MediaKind::Movie => *self.movie_genres.write().await = genres,
            MediaKind::Tv => *self.tv_genres.write().await = genres,
        }
    }

    /// Set the details returned by `details`. Unset details yield NotFound.
    pub async fn set_details(&self, details: ContentDetails) {
        *self.details.write().await = Some(details);
    }

    /// Set the cast returned by `credits`.
    pub async fn set_cast(&self, cast: Vec<CastMember>) {
        *self.cast.write().await = cast;
    }

    /// Set the providers returned by `watch_providers`.
    pub async fn set_providers(&self, providers: WatchProviders) {
        *self.providers.write().await = providers;
    }

    /// Make the next operation fail with an API error.
    pub async fn fail_next(&self) {
        *self.fail_next.write().await = true;
    }

    /// Query plans executed so far.
    pub async fn executed_plans(&self) -> Vec<QueryPlan> {
        self.plans.read().await.clone()
    }

    /// Number of genre-list fetches that reached the mock.
    pub fn genre_calls(&self) -> usize {
        self.genre_call_count.load(Ordering::SeqCst)
    }

    async fn check_failure(&self) -> Result<(), CatalogError> {
        let mut fail = self.fail_next.write().await;
        if *fail {
            *fail = false;
            return Err(CatalogError::ApiError {
                status: 503,
                message: "mock upstream failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for MockCatalog {
    async fn fetch_page(&self, plan: &QueryPlan) -> Result<CatalogPage, CatalogError> {
        self.check_failure().await?;
        self.plans.write().await.push(plan.clone());
        Ok(self
            .page
            .read()
            .await
            .clone()
            .unwrap_or_else(CatalogPage::empty))
    }

    async fn videos(&self, _kind: MediaKind, _id: u64) -> Result<Vec<VideoRecord>, CatalogError> {
        self.check_failure().await?;
        Ok(self.videos.read().await.clone())
    }

    async fn similar(&self, _kind: MediaKind, _id: u64) -> Result<Vec<ContentItem>, CatalogError> {
        self.check_failure().await?;
        Ok(self.similar.read().await.clone())
    }

    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>, CatalogError> {
        self.genre_call_count.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(match kind {
            MediaKind::Movie => self.movie_genres.read().await.clone(),
            MediaKind::Tv => self.tv_genres.read().await.clone(),
        })
    }

    async fn details(&self, kind: MediaKind, id: u64) -> Result<ContentDetails, CatalogError> {
        self.check_failure().await?;
        self.details
            .read()
            .await
            .clone()
            .ok_or_else(|| CatalogError::NotFound(format!("{} {}", kind.path_segment(), id)))
    }

    async fn credits(&self, _kind: MediaKind, _id: u64) -> Result<Vec<CastMember>, CatalogError> {
        self.check_failure().await?;
        Ok(self.cast.read().await.clone())
    }

    async fn watch_providers(
        &self,
        _kind: MediaKind,
        _id: u64,
        _region: &str,
    ) -> Result<WatchProviders, CatalogError> {
        self.check_failure().await?;
        Ok(self.providers.read().await.clone())
    }
}
