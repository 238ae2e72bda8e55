pub mod catalog;
pub mod config;
pub mod discovery;
pub mod metrics;
pub mod ratings;
pub mod testing;

pub use catalog::{
    CastMember, CatalogError, CatalogGateway, CatalogPage, ContentDetails, ContentItem, Genre,
    TmdbClient, TmdbConfig, WatchProvider, WatchProviders,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
pub use discovery::{
    build_query, process, select_trailer, ContentOverview, Discovery, DiscoveryConfig,
    FilterState, GenreCache, InvalidFilter, MediaKind, QueryMode, QueryPlan, SortKey, VideoKind,
    VideoRecord, YearRange,
};
pub use ratings::{OmdbClient, OmdbConfig, Ratings, RatingsError};
