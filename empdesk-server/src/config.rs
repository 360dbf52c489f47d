//! Server configuration - file, environment and defaults
//!
//! Precedence, lowest first:
//! 1. built-in defaults
//! 2. TOML file (`~/.empdesk/config.toml`, or an explicit path)
//! 3. environment: `EMPDESK_BIND`, `DATABASE_URL`
//!
//! Command-line flags are layered on top by the binary.

use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::DEFAULT_MAX_CONNECTIONS;

/// Bind address environment variable
pub const BIND_ENV: &str = "EMPDESK_BIND";
/// Database URL environment variable
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        source: AddrParseError,
    },
}

/// Full application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

/// `[server]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind: SocketAddr,
    /// Allow any CORS origin (default: false = localhost only)
    pub cors_permissive: bool,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            request_timeout_secs: 30,
        }
    }
}

/// `[database]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// sqlx SQLite URL, e.g. `sqlite://./employees.db` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: format!("sqlite://{}", config_dir().join("employees.db").display()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// `~/.empdesk`
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".empdesk")
}

impl AppConfig {
    /// Default config file path: ~/.empdesk/config.toml
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load from `path` (which must exist) or from the default path when it
    /// exists, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Apply `EMPDESK_BIND` / `DATABASE_URL` as read by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(BIND_ENV) {
            self.server.bind = value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?;
        }

        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }

        Ok(())
    }
}
