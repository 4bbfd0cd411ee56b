//! Client configuration.

use crate::error::{HeroError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_HEROES_PATH: &str = "api/heroes";

/// Where the heroes collection lives and how to reach it.
///
/// ```toml
/// base_url = "http://localhost:8080"
/// heroes_path = "api/heroes"
/// timeout_secs = 10
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub heroes_path: String,
    /// Per-request timeout. `None` leaves completion to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            heroes_path: DEFAULT_HEROES_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a request URL.
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(HeroError::config("base_url cannot be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(HeroError::config(format!(
                "base_url must start with http:// or https://, got `{base}`"
            )));
        }
        Ok(())
    }

    /// Full URL of the collection endpoint, e.g. `http://localhost:8080/api/heroes`.
    pub fn heroes_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.heroes_path.trim().trim_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heroes_url() {
        assert_eq!(
            ClientConfig::default().heroes_url(),
            "http://localhost:8080/api/heroes"
        );
    }

    #[test]
    fn test_heroes_url_normalizes_slashes() {
        let config = ClientConfig {
            base_url: "http://example.test/".to_string(),
            heroes_path: "/v2/heroes/".to_string(),
            timeout_secs: None,
        };
        assert_eq!(config.heroes_url(), "http://example.test/v2/heroes");
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let config = ClientConfig::from_toml_str("timeout_secs = 5").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.heroes_path, DEFAULT_HEROES_PATH);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_toml_rejects_bad_scheme() {
        let err = ClientConfig::from_toml_str(r#"base_url = "ftp://nope""#).unwrap_err();
        assert!(matches!(err, HeroError::Config(_)));
    }

    #[test]
    fn test_from_toml_rejects_malformed_document() {
        let err = ClientConfig::from_toml_str("base_url = ").unwrap_err();
        assert!(matches!(err, HeroError::Serialization { ref format, .. } if format == "TOML"));
    }
}
