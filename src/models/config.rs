//! Configuration model.
//!
//! The only configurable value in the core is the OMDb API key. It is
//! discovered from the `OMDB_API_KEY` environment variable first, then from
//! `<config_dir>/video-sweep/config.toml`. A missing key is not an error:
//! movie reconciliation simply degrades to `Unverifiable`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// OMDb configuration.
    #[serde(default)]
    pub omdb: OmdbConfig,
}

/// OMDb configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// API key.
    pub api_key: Option<String>,
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("video-sweep")
}

/// Load configuration from file, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
            tracing::warn!("Ignoring malformed config file: {}", config_path.display());
        }
    }

    Config::default()
}

/// Discover the OMDb API key: environment variable first, then config file.
pub fn discover_api_key() -> Option<String> {
    if let Ok(key) = std::env::var("OMDB_API_KEY") {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }
    load_config().omdb.api_key.filter(|k| !k.trim().is_empty())
}
