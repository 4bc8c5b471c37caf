//! Configuration for the contact book.
//!
//! This module handles loading configuration from environment variables,
//! honoring a `.env` file when one is present. Every variable is optional
//! and falls back to a default, so the program runs with no setup at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default total width of the rendered contact table, in columns.
const DEFAULT_TABLE_WIDTH: usize = 100;

/// Narrower than this and the address column collapses to nothing.
const MIN_TABLE_WIDTH: usize = 40;

/// Configuration for the contact book shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level for the tracing subscriber (default: "error")
    pub log_level: String,

    /// Total width of the rendered contact table (default: 100)
    pub table_width: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_TABLE_WIDTH`: Table width in columns (default: 100, minimum: 40)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level =
            env::var("CONTACT_BOOK_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let table_width = Self::parse_env_usize("CONTACT_BOOK_TABLE_WIDTH", DEFAULT_TABLE_WIDTH)?;
        if table_width < MIN_TABLE_WIDTH {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_TABLE_WIDTH".to_string(),
                reason: format!("Must be at least {} columns, got: {}", MIN_TABLE_WIDTH, table_width),
            });
        }

        Ok(Config {
            log_level,
            table_width,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            table_width: DEFAULT_TABLE_WIDTH,
        }
    }
}
