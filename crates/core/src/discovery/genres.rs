//! Process-lifetime memoization of the catalog's genre taxonomy.

use tokio::sync::OnceCell;
use tracing::warn;

use super::types::MediaKind;
use crate::catalog::{CatalogGateway, Genre};

/// Read-through cache for genre lists.
///
/// Genre taxonomies are effectively static for the process lifetime, so the
/// first successful lookup per media kind is kept forever; there is no TTL
/// and no invalidation. A failed lookup is NOT memoized: it returns an
/// empty list and the next call retries the catalog.
#[derive(Debug, Default)]
pub struct GenreCache {
    movie: OnceCell<Vec<Genre>>,
    tv: OnceCell<Vec<Genre>>,
}

impl GenreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the genre list for a kind, fetching it through `gateway` on the
    /// first call.
    pub async fn get(&self, gateway: &dyn CatalogGateway, kind: MediaKind) -> Vec<Genre> {
        let cell = match kind {
            MediaKind::Movie => &self.movie,
            MediaKind::Tv => &self.tv,
        };

        match cell
            .get_or_try_init(|| async { gateway.genres(kind).await })
            .await
        {
            Ok(genres) => genres.clone(),
            Err(e) => {
                warn!(kind = ?kind, error = %e, "genre list fetch failed");
                Vec::new()
            }
        }
    }
}
