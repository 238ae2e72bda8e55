use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::catalog::TmdbConfig;
use crate::discovery::DiscoveryConfig;
use crate::ratings::OmdbConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Catalog gateway credentials (required).
    pub catalog: TmdbConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Ratings gateway credentials (optional; ratings endpoint reports
    /// unavailable without them).
    #[serde(default)]
    pub ratings: Option<OmdbConfig>,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<SanitizedRatingsConfig>,
    pub discovery: DiscoveryConfig,
}

/// Sanitized catalog config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub timeout_secs: u32,
}

/// Sanitized ratings config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedRatingsConfig {
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                api_key_configured: !config.catalog.api_key.is_empty(),
                base_url: config.catalog.base_url.clone(),
                timeout_secs: config.catalog.timeout_secs,
            },
            ratings: config.ratings.as_ref().map(|r| SanitizedRatingsConfig {
                api_key_configured: !r.api_key.is_empty(),
                base_url: r.base_url.clone(),
            }),
            discovery: config.discovery.clone(),
        }
    }
}
