//! Centralized configuration for demo-runner.
//!
//! Environment variables are read and validated once at startup.

use std::env;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

pub const DEFAULT_USER_ID: &str = "1 OR 1=1";
pub const DEFAULT_SEARCH: &str = "%' OR '1'='1";

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Configuration error for {field}: {message}")]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

/// Runner configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log format (default: pretty)
    pub log_format: LogFormat,
    /// User id fed to the API handlers when `--user-id` is not given
    pub default_user_id: String,
    /// Search term fed to `search_users` when `--search` is not given
    pub default_search: String,
}

impl Config {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format =
            LogFormat::from_str(&lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        let default_user_id = match lookup("DEMO_DEFAULT_USER_ID") {
            Some(v) if v.is_empty() => {
                return Err(ConfigError {
                    field: "DEMO_DEFAULT_USER_ID",
                    message: "must not be empty when set".into(),
                });
            }
            Some(v) => v,
            None => DEFAULT_USER_ID.to_string(),
        };

        let default_search =
            lookup("DEMO_DEFAULT_SEARCH").unwrap_or_else(|| DEFAULT_SEARCH.to_string());

        Ok(Self {
            log_format,
            default_user_id,
            default_search,
        })
    }
}
