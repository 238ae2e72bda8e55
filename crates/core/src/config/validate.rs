use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog section exists (enforced by serde) and carries an API key
/// - Server port is not 0
/// - Discovery locale/region are non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.api_key cannot be empty".to_string(),
        ));
    }

    if config.discovery.locale.is_empty() {
        return Err(ConfigError::ValidationError(
            "discovery.locale cannot be empty".to_string(),
        ));
    }

    if config.discovery.region.is_empty() {
        return Err(ConfigError::ValidationError(
            "discovery.region cannot be empty".to_string(),
        ));
    }

    Ok(())
}
