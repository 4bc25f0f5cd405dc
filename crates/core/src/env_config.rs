//! Environment variable parsing with warn-level logging for invalid values.

use std::time::Duration;

use crate::constants::{DEFAULT_CACHE_MAX_AGE_SECS, DEFAULT_UPDATE_INTERVAL_SECS};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_or_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Parse a duration in whole seconds; zero is rejected like an unparsable value.
pub fn env_secs_with_default(var: &str, default_secs: u64) -> Duration {
    secs_or_default(var, std::env::var(var).ok().as_deref(), default_secs)
}

fn secs_or_default(var: &str, raw: Option<&str>, default_secs: u64) -> Duration {
    let secs = parse_or_default(var, raw, default_secs);
    if secs == 0 {
        tracing::warn!(var, default = default_secs, "interval must be positive, using default");
        return Duration::from_secs(default_secs);
    }
    Duration::from_secs(secs)
}

/// Read an environment variable, treating empty or whitespace-only values as unset.
pub fn env_non_empty(var: &str) -> Option<String> {
    non_empty(std::env::var(var).ok())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Runtime configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Postgres connection string of the hosted database (`DATABASE_URL`).
    pub database_url: Option<String>,
    /// Update manifest URL (`LABDESK_UPDATE_URL`). Update checks are off when unset.
    pub update_url: Option<String>,
    /// Interval between background update checks (`LABDESK_UPDATE_INTERVAL_SECS`).
    pub update_interval: Duration,
    /// Age after which cached grid lists are re-fetched (`LABDESK_CACHE_MAX_AGE_SECS`).
    pub cache_max_age: Duration,
}

impl ConsoleConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            database_url: env_non_empty("DATABASE_URL"),
            update_url: env_non_empty("LABDESK_UPDATE_URL"),
            update_interval: env_secs_with_default(
                "LABDESK_UPDATE_INTERVAL_SECS",
                DEFAULT_UPDATE_INTERVAL_SECS,
            ),
            cache_max_age: env_secs_with_default(
                "LABDESK_CACHE_MAX_AGE_SECS",
                DEFAULT_CACHE_MAX_AGE_SECS,
            ),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            update_url: None,
            update_interval: Duration::from_secs(DEFAULT_UPDATE_INTERVAL_SECS),
            cache_max_age: Duration::from_secs(DEFAULT_CACHE_MAX_AGE_SECS),
        }
    }
}
