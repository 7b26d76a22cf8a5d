//! Runtime configuration from the environment.

use std::path::PathBuf;

use log::LevelFilter;

use crate::paths;

pub const API_URL_VAR: &str = "PORTICO_API_URL";
pub const TOKEN_DB_VAR: &str = "PORTICO_TOKEN_DB";
pub const LOG_LEVEL_VAR: &str = "PORTICO_LOG_LEVEL";
pub const PASSWORD_MIN_LENGTH_VAR: &str = "PORTICO_PASSWORD_MIN_LENGTH";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("no token database path: set PORTICO_TOKEN_DB or a home directory")]
    NoTokenDb,
}

/// Settings for the login client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API; the login endpoint is `<api_url>/login`.
    ///
    /// Default: `http://localhost:5050/api`
    pub api_url: String,

    /// SQLite file holding the stored token.
    ///
    /// Default: `session.db` in the platform data directory
    pub token_db: Option<PathBuf>,

    /// Default: `Info`
    pub log_level: LevelFilter,

    /// Default: 5
    pub password_min_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5050/api".to_string(),
            token_db: paths::default_token_db(),
            log_level: LevelFilter::Info,
            password_min_length: 5,
        }
    }
}

impl Config {
    /// Load from the process environment, reading a `.env` file first if
    /// one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables. Unset variables keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            config = config.with_api_url(url);
        }
        if let Some(path) = lookup(TOKEN_DB_VAR) {
            config = config.with_token_db(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            let parsed = level.parse().map_err(|_| ConfigError::InvalidValue {
                key: LOG_LEVEL_VAR,
                value: level.clone(),
            })?;
            config = config.with_log_level(parsed);
        }
        if let Some(min) = lookup(PASSWORD_MIN_LENGTH_VAR) {
            let parsed = min.parse().map_err(|_| ConfigError::InvalidValue {
                key: PASSWORD_MIN_LENGTH_VAR,
                value: min.clone(),
            })?;
            config = config.with_password_min_length(parsed);
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_token_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_db = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_password_min_length(mut self, min: usize) -> Self {
        self.password_min_length = min;
        self
    }

    /// The token database path, or an error if none could be determined.
    pub fn token_db_path(&self) -> Result<&PathBuf, ConfigError> {
        self.token_db.as_ref().ok_or(ConfigError::NoTokenDb)
    }
}
