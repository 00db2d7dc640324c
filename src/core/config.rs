//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::api::{AligniClient, FixedInterval, HttpTransport, RATE_LIMIT_SECS};

/// Environment variable holding the API token
pub const ENV_API_TOKEN: &str = "ALIGNI_API_TOKEN";
/// Environment variable holding the base URL
pub const ENV_URL_BASE: &str = "ALIGNI_URL_BASE";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "ALIGNI_TIMEOUT_SECS";
/// Environment variable pointing at an alternate config file
pub const ENV_CONFIG: &str = "ALIGNI_CONFIG";

/// Largest accepted `rate_limit_secs`
const MAX_RATE_LIMIT_SECS: f64 = 3600.0;

/// Valid configuration keys with their descriptions
pub const VALID_KEYS: &[(&str, &str)] = &[
    ("api_token", "Aligni API token (path segment after the base URL)"),
    (
        "url_base",
        "Base URL of the Aligni API, e.g. https://acme.aligni.com/api/v2/",
    ),
    ("timeout_secs", "HTTP request timeout in seconds"),
    (
        "rate_limit_secs",
        "Minimum seconds between API calls (default 2.1)",
    ),
];

/// Errors from loading, editing or applying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("'{key}' is not configured. Set it with `aligni config set {key} <value>` or ${env}")]
    MissingKey {
        key: &'static str,
        env: &'static str,
    },

    #[error("Unknown configuration key '{0}'. Run `aligni config keys` for the list")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for '{key}': {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to create Aligni client: {0}")]
    Client(#[from] crate::api::AligniError),
}

/// Aligni configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API token inserted into every request URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Base URL the token is appended to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_base: Option<String>,

    /// Per-request HTTP timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Minimum spacing between calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_secs: Option<f64>,
}

/// Token and base URL, both present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
    pub url_base: String,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/aligni/config.yaml or $ALIGNI_CONFIG)
        if let Some(path) = Self::global_config_path() {
            match Self::read_file(&path) {
                Ok(Some(global)) => config.merge(global),
                Ok(None) => {}
                Err(e) => tracing::warn!("ignoring global config: {}", e),
            }
        }

        // 3. Environment variables
        config.apply_env(|key| std::env::var(key).ok());

        config
    }

    /// Path of the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        directories::ProjectDirs::from("", "", "aligni")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Read a config file; `Ok(None)` when it does not exist
    pub fn read_file(path: &Path) -> Result<Option<Config>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(Some(Config::default()));
        }
        let config: Config = serde_yml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.rate_limit()?;
        Ok(Some(config))
    }

    /// Write this config as YAML, creating parent directories
    pub fn write_file(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let yaml = serde_yml::to_string(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, yaml).map_err(io_err)
    }

    /// Overlay environment values, looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.is_empty()) {
            self.api_token = Some(token);
        }
        if let Some(url) = lookup(ENV_URL_BASE).filter(|v| !v.is_empty()) {
            self.url_base = Some(url);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT).and_then(|v| v.trim().parse().ok()) {
            self.timeout_secs = Some(timeout);
        }
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.api_token.is_some() {
            self.api_token = other.api_token;
        }
        if other.url_base.is_some() {
            self.url_base = other.url_base;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.rate_limit_secs.is_some() {
            self.rate_limit_secs = other.rate_limit_secs;
        }
    }

    /// Current value of a key as display text
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(match key {
            "api_token" => self.api_token.clone(),
            "url_base" => self.url_base.clone(),
            "timeout_secs" => self.timeout_secs.map(|v| v.to_string()),
            "rate_limit_secs" => self.rate_limit_secs.map(|v| v.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        })
    }

    /// Set a key from its text form
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        };
        match key {
            "api_token" => self.api_token = Some(value.to_string()),
            "url_base" => self.url_base = Some(value.to_string()),
            "timeout_secs" => {
                self.timeout_secs = Some(
                    value
                        .trim()
                        .parse()
                        .map_err(|_| invalid("expected a whole number of seconds"))?,
                )
            }
            "rate_limit_secs" => {
                let secs: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected a number of seconds"))?;
                rate_limit_duration(secs).map_err(|message| invalid(message))?;
                self.rate_limit_secs = Some(secs);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Remove a key; returns whether it was set
    pub fn unset(&mut self, key: &str) -> Result<bool, ConfigError> {
        Ok(match key {
            "api_token" => self.api_token.take().is_some(),
            "url_base" => self.url_base.take().is_some(),
            "timeout_secs" => self.timeout_secs.take().is_some(),
            "rate_limit_secs" => self.rate_limit_secs.take().is_some(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        })
    }

    /// Token and base URL, or the first one missing
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let api_token = self
            .api_token
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingKey {
                key: "api_token",
                env: ENV_API_TOKEN,
            })?;
        let url_base = self
            .url_base
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingKey {
                key: "url_base",
                env: ENV_URL_BASE,
            })?;
        Ok(Credentials {
            api_token,
            url_base,
        })
    }

    /// Spacing between calls
    pub fn rate_limit(&self) -> Result<Duration, ConfigError> {
        let secs = self.rate_limit_secs.unwrap_or(RATE_LIMIT_SECS);
        rate_limit_duration(secs).map_err(|message| ConfigError::InvalidValue {
            key: "rate_limit_secs".to_string(),
            value: secs.to_string(),
            message: message.to_string(),
        })
    }

    /// Build a client over HTTP from this configuration
    pub fn client(&self) -> Result<AligniClient, ConfigError> {
        let credentials = self.credentials()?;
        let transport = HttpTransport::with_timeout(self.timeout_secs.map(Duration::from_secs))
            .map_err(crate::api::AligniError::from)?;
        Ok(
            AligniClient::with_transport(credentials.api_token, credentials.url_base, transport)
                .with_rate_limiter(FixedInterval::new(self.rate_limit()?)),
        )
    }
}

/// Check a call spacing in seconds: between zero and an hour
fn rate_limit_duration(secs: f64) -> Result<Duration, &'static str> {
    if !(0.0..=MAX_RATE_LIMIT_SECS).contains(&secs) {
        return Err("must be between 0 and 3600 seconds");
    }
    Duration::try_from_secs_f64(secs).map_err(|_| "not a valid number of seconds")
}
