//! Configuration loaded from the platform config directory
//!
//! `skycast/config.toml`:
//!
//! ```toml
//! api_key = "..."
//! geolocate = true
//! # weather_url = "https://api.openweathermap.org"
//! # locate_url = "http://ip-api.com"
//! ```

use std::path::PathBuf;
use std::{env, fs};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable consulted when the config file carries no key.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine platform config directory")]
    NoConfigDir,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "no API key configured; set `api_key` in the config file, \
         the {API_KEY_ENV} environment variable, or pass --api-key"
    )]
    MissingApiKey,
}

/// On-disk configuration. Missing file means all defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Provider API key.
    pub api_key: Option<String>,

    /// Whether the locate service may be used.
    #[serde(default = "default_geolocate")]
    pub geolocate: bool,

    /// Weather provider base URL override.
    pub weather_url: Option<String>,

    /// Locate service base URL override.
    pub locate_url: Option<String>,
}

fn default_geolocate() -> bool {
    true
}

impl Config {
    /// Load from disk, or return defaults if no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self {
                geolocate: default_geolocate(),
                ..Self::default()
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let dirs =
            ProjectDirs::from("", "", "skycast").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key: CLI override, then environment, then file.
    pub fn resolve_api_key(&self, cli_key: Option<String>) -> Result<String, ConfigError> {
        cli_key
            .or_else(|| env::var(API_KEY_ENV).ok())
            .or_else(|| self.api_key.clone())
            .ok_or(ConfigError::MissingApiKey)
    }
}
