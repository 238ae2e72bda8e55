//! Discovery tuning knobs.

use serde::{Deserialize, Serialize};

/// Tuning for query building and result shaping.
///
/// The vote-count floors control how aggressively low-signal items are
/// suppressed: browsing without a rating filter uses the higher floor,
/// while an explicit rating filter relaxes it since the rating threshold
/// already narrows results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Locale sent with every catalog request (default: en-US).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Region used for watch-provider availability (default: US).
    #[serde(default = "default_region")]
    pub region: String,
    /// Minimum vote count when no rating filter is applied (default: 50).
    #[serde(default = "default_vote_count_floor")]
    pub vote_count_floor: u32,
    /// Minimum vote count when a rating filter is applied (default: 20).
    #[serde(default = "default_rated_vote_count_floor")]
    pub rated_vote_count_floor: u32,
    /// Maximum similar titles returned per item (default: 10).
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
    /// Maximum cast members returned per item (default: 10).
    #[serde(default = "default_cast_limit")]
    pub cast_limit: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            region: default_region(),
            vote_count_floor: default_vote_count_floor(),
            rated_vote_count_floor: default_rated_vote_count_floor(),
            similar_limit: default_similar_limit(),
            cast_limit: default_cast_limit(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_region() -> String {
    "US".to_string()
}

fn default_vote_count_floor() -> u32 {
    50
}

fn default_rated_vote_count_floor() -> u32 {
    20
}

fn default_similar_limit() -> usize {
    10
}

fn default_cast_limit() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.region, "US");
        assert_eq!(config.vote_count_floor, 50);
        assert_eq!(config.rated_vote_count_floor, 20);
        assert_eq!(config.similar_limit, 10);
        assert_eq!(config.cast_limit, 10);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DiscoveryConfig = toml::from_str(
            r#"
vote_count_floor = 100
locale = "de-DE"
"#,
        )
        .unwrap();
        assert_eq!(config.vote_count_floor, 100);
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.rated_vote_count_floor, 20);
    }
}
