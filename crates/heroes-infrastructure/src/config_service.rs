//! Configuration service implementation.
//!
//! Resolves the `ClientConfig` from, in increasing priority:
//! 1. built-in defaults
//! 2. a TOML file (explicit path, else `<config_dir>/heroes/config.toml`)
//! 3. environment variables (`HEROES_BASE_URL`, `HEROES_API_PATH`, `HEROES_TIMEOUT_SECS`)

use heroes_core::{
    ClientConfig,
    error::{HeroError, Result},
};
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "HEROES_BASE_URL";
pub const ENV_API_PATH: &str = "HEROES_API_PATH";
pub const ENV_TIMEOUT_SECS: &str = "HEROES_TIMEOUT_SECS";

const APP_DIR: &str = "heroes";
const CONFIG_FILE: &str = "config.toml";

/// Loads client configuration from file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Uses the default config file location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an explicit config file. A missing explicit file is an error.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default config file path (e.g., `~/.config/heroes/config.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads the file layer and applies process environment overrides.
    pub fn load(&self) -> Result<ClientConfig> {
        let config = self.load_file()?;
        let config = apply_env(config, |key| std::env::var(key).ok())?;
        config.validate()?;
        tracing::debug!(base_url = %config.base_url, path = %config.heroes_path, "client config loaded");
        Ok(config)
    }

    fn load_file(&self) -> Result<ClientConfig> {
        match &self.path {
            Some(path) => read_config(path),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => read_config(&path),
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    Ok(ClientConfig::default())
                }
            },
        }
    }
}

fn read_config(path: &Path) -> Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| HeroError::Io {
        message: format!("Failed to read config file '{}': {}", path.display(), e),
    })?;
    ClientConfig::from_toml_str(&content)
}

/// Overlays environment values onto `config`. `lookup` abstracts the
/// environment so tests don't have to mutate the process.
fn apply_env(
    mut config: ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig> {
    if let Some(base_url) = lookup(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(path) = lookup(ENV_API_PATH) {
        config.heroes_path = path;
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        let secs = raw.trim().parse::<u64>().map_err(|_| {
            HeroError::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got `{raw}`"))
        })?;
        config.timeout_secs = Some(secs);
    }
    Ok(config)
}
