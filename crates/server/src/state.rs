use marquee_core::{Config, Discovery, OmdbClient, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    discovery: Discovery,
    ratings: Option<OmdbClient>,
}

impl AppState {
    pub fn new(config: Config, discovery: Discovery, ratings: Option<OmdbClient>) -> Self {
        Self {
            config,
            discovery,
            ratings,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    pub fn ratings(&self) -> Option<&OmdbClient> {
        self.ratings.as_ref()
    }
}
