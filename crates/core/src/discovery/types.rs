//! Types for the content discovery core.

use serde::{Deserialize, Serialize};

/// Kind of content being browsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// URL path segment used by the upstream catalog.
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// The date field the upstream catalog filters and sorts this kind by.
    pub fn date_field(&self) -> &'static str {
        match self {
            MediaKind::Movie => "primary_release_date",
            MediaKind::Tv => "first_air_date",
        }
    }
}

/// Result ordering requested from the upstream catalog.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Popularity,
    RatingDesc,
    ReleaseDateDesc,
    RevenueDesc,
}

impl SortKey {
    /// Upstream sort token. Date sorting uses the kind's date field.
    pub fn token(&self, kind: MediaKind) -> String {
        match self {
            SortKey::Popularity => "popularity.desc".to_string(),
            SortKey::RatingDesc => "vote_average.desc".to_string(),
            SortKey::ReleaseDateDesc => format!("{}.desc", kind.date_field()),
            SortKey::RevenueDesc => "revenue.desc".to_string(),
        }
    }
}

/// An inclusive year range filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// The widest selectable range: earliest catalog entries through the
    /// current year. Used to fill in a missing bound when only one end of
    /// the range was chosen.
    pub fn unrestricted() -> Self {
        use chrono::Datelike;
        Self {
            min: 1900,
            max: chrono::Utc::now().year(),
        }
    }
}

/// User-selected browse criteria for one page of results.
///
/// A non-empty `query` selects search mode; otherwise results come from
/// the filter-driven discover endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    /// Movies or TV.
    pub kind: MediaKind,
    /// Genre filter (upstream genre ID, may be comma-separated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    /// Year range filter. `None` means unrestricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,
    /// Original-language filter (ISO 639-1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    /// Minimum average vote, 0.0 disables the filter. Valid range [0, 10].
    #[serde(default)]
    pub min_rating: f32,
    /// Requested ordering.
    #[serde(default)]
    pub sort: SortKey,
    /// Free-text query. Non-empty switches to search mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// 1-based page number, passed through to the upstream catalog.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl FilterState {
    /// Unfiltered first page for the given kind.
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            genre_id: None,
            year_range: None,
            original_language: None,
            min_rating: 0.0,
            sort: SortKey::default(),
            query: None,
            page: 1,
        }
    }

    /// The effective free-text query, if one is set and non-empty.
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

/// Which upstream endpoint family a query targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    Discover,
    Search,
}

/// A fully-built upstream query: endpoint selection plus parameters.
///
/// Building is deterministic; the same `FilterState` always yields the
/// same plan. The API credential is injected at the gateway boundary,
/// never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub mode: QueryMode,
    pub kind: MediaKind,
    /// Parameters in emission order.
    pub params: Vec<(&'static str, String)>,
}

impl QueryPlan {
    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_serialization() {
        assert_eq!(serde_json::to_string(&MediaKind::Movie).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&MediaKind::Tv).unwrap(), "\"tv\"");
    }

    #[test]
    fn test_sort_token_per_kind() {
        assert_eq!(SortKey::Popularity.token(MediaKind::Movie), "popularity.desc");
        assert_eq!(SortKey::RatingDesc.token(MediaKind::Tv), "vote_average.desc");
        assert_eq!(
            SortKey::ReleaseDateDesc.token(MediaKind::Movie),
            "primary_release_date.desc"
        );
        assert_eq!(
            SortKey::ReleaseDateDesc.token(MediaKind::Tv),
            "first_air_date.desc"
        );
        assert_eq!(SortKey::RevenueDesc.token(MediaKind::Movie), "revenue.desc");
    }

    #[test]
    fn test_query_text_blank_is_none() {
        let mut filters = FilterState::new(MediaKind::Movie);
        assert_eq!(filters.query_text(), None);

        filters.query = Some("   ".to_string());
        assert_eq!(filters.query_text(), None);

        filters.query = Some("iron man".to_string());
        assert_eq!(filters.query_text(), Some("iron man"));
    }

    #[test]
    fn test_filter_state_deserialize_defaults() {
        let json = r#"{"kind": "movie"}"#;
        let filters: FilterState = serde_json::from_str(json).unwrap();
        assert_eq!(filters.kind, MediaKind::Movie);
        assert_eq!(filters.page, 1);
        assert_eq!(filters.sort, SortKey::Popularity);
        assert_eq!(filters.min_rating, 0.0);
        assert!(filters.year_range.is_none());
    }
}
