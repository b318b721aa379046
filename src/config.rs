//! Runtime configuration.
//!
//! Values come from environment variables (a `.env` file is read first if
//! present). Command-line flags in `main` override them.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};
use crate::model::DEFAULT_WINDOW_DAYS;

pub const DEFAULT_BOOK_FILE: &str = ".data/contacts.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the contact book is stored (`CONTACT_BOOK_FILE`).
    pub book_file: PathBuf,

    /// How many days ahead `birthdays` looks (`BIRTHDAY_WINDOW_DAYS`).
    pub birthday_window_days: i64,

    /// Log filter used when `RUST_LOG` is unset (`LOG_LEVEL`).
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let book_file = match lookup("CONTACT_BOOK_FILE") {
            Some(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Some(val) => PathBuf::from(val),
            None => defaults.book_file,
        };

        let birthday_window_days = match lookup("BIRTHDAY_WINDOW_DAYS") {
            Some(val) => val
                .trim()
                .parse::<u32>()
                .map(i64::from)
                .map_err(|_| ConfigError::InvalidValue {
                    var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                    reason: format!("Must be a non-negative number, got: {}", val),
                })?,
            None => defaults.birthday_window_days,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_file,
            birthday_window_days,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
