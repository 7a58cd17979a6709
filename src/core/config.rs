//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Discord token, log level, poll interval and empty-payload policy

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Default scheduler poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub log_level: String,
    pub poll_interval_secs: u64,
    /// Whether a whitespace-only reminder text is accepted in the guided dialogue
    pub allow_empty_payload: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("DISCORD_TOKEN environment variable is not set")?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let poll_interval_secs = match lookup("REMINDER_POLL_INTERVAL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("REMINDER_POLL_INTERVAL_SECS must be a positive integer, got '{raw}'")
            })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };
        if poll_interval_secs == 0 {
            bail!("REMINDER_POLL_INTERVAL_SECS must be at least 1");
        }

        let allow_empty_payload = match lookup("REMINDER_ALLOW_EMPTY_PAYLOAD") {
            Some(raw) => parse_flag(&raw).with_context(|| {
                format!("REMINDER_ALLOW_EMPTY_PAYLOAD must be true or false, got '{raw}'")
            })?,
            None => true,
        };

        Ok(Config {
            discord_token,
            log_level,
            poll_interval_secs,
            allow_empty_payload,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
