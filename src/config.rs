//! Configuration management for the contact book.
//!
//! Configuration comes from environment variables, with an optional `.env`
//! file loaded through `dotenvy` (which never prints to stdout, keeping the
//! interactive prompt clean).

use crate::error::{ConfigError, ConfigResult};
use crate::store::DEFAULT_UPCOMING_DAYS;
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead considered upcoming for birthday reminders (default: 7)
    pub upcoming_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_BIRTHDAY_DAYS`: reminder window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let upcoming_days = Self::parse_env_i64("UPCOMING_BIRTHDAY_DAYS", DEFAULT_UPCOMING_DAYS)?;
        if upcoming_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            upcoming_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            log_level: "error".to_string(),
        }
    }
}
