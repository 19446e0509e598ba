//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present; it is never
//! required.

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted look-ahead for the `birthdays` command.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Prompt printed before every command by default.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the assistant bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Prompt printed before every command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Look-ahead in days, 0-366 (default: 7)
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        Self::from_current_env()
    }

    /// Read configuration from the process environment without touching `.env`.
    pub fn from_current_env() -> ConfigResult<Self> {
        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
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
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
