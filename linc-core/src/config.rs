//! Environment-driven configuration
//!
//! Every setting has a fixed default so the service starts against a local
//! Postgres without any configuration. Values come from the process
//! environment (optionally seeded from a `.env` file by the binary).

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ConfigError;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "linc_project_topics";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Connection settings for the topic store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: DEFAULT_DB_USER.to_string(),
            password: String::new(),
            database: DEFAULT_DB_NAME.to_string(),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

/// Full service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreConfig,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Directory served for static assets (stylesheet, favicon)
    pub public_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            port: DEFAULT_HTTP_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DB_HOST` | `localhost` |
    /// | `DB_PORT` | `5432` |
    /// | `DB_USER` | `postgres` |
    /// | `DB_PASSWORD` | empty |
    /// | `DB_NAME` | `linc_project_topics` |
    /// | `DB_MAX_CONNECTIONS` | `5` |
    /// | `PORT` | `3000` |
    /// | `PUBLIC_DIR` | `public` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store = StoreConfig {
            host: string_or(&lookup, "DB_HOST", defaults.store.host),
            port: parse_or(&lookup, "DB_PORT", defaults.store.port)?,
            user: string_or(&lookup, "DB_USER", defaults.store.user),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: string_or(&lookup, "DB_NAME", defaults.store.database),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.store.max_connections)?,
        };

        Ok(Self {
            store,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            public_dir: lookup("PUBLIC_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        })
    }
}

fn string_or<F>(lookup: &F, key: &'static str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::debug!("{key} not set, using default: {default}");
            default
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::invalid_value(key, value.as_str(), e)),
        _ => {
            tracing::debug!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
