//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DATE_FORMAT, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_TIMESTAMP_FORMAT,
};
use crate::domain::HashCost;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub hash_cost: HashCost,
    pub formats: DateFormats,
}

/// strftime patterns used when rendering user projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormats {
    pub date: String,
    pub timestamp: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_FORMAT.to_string(),
            timestamp: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("hash_cost", &self.hash_cost)
            .field("formats", &self.formats)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            hash_cost: HashCost::default(),
            formats: DateFormats::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            hash_cost: HashCost {
                memory_kib: parse_or("HASH_MEMORY_KIB", DEFAULT_HASH_MEMORY_KIB),
                iterations: parse_or("HASH_ITERATIONS", DEFAULT_HASH_ITERATIONS),
                parallelism: parse_or("HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM),
            },
            formats: DateFormats {
                date: format_or("DATE_FORMAT", DEFAULT_DATE_FORMAT),
                timestamp: format_or("TIMESTAMP_FORMAT", DEFAULT_TIMESTAMP_FORMAT),
            },
        }
    }

    /// Replace the database URL (CLI override).
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }
}

/// Read a numeric variable, falling back to `default` when unset or malformed.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// Read a strftime pattern, falling back to `default` when unset or unparsable.
fn format_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(raw) if is_valid_format(&raw) => raw,
        Ok(raw) => {
            tracing::warn!("{} has invalid format {:?}, using {:?}", key, raw, default);
            default.to_string()
        }
        Err(_) => default.to_string(),
    }
}

/// True when chrono can render every specifier in `pattern`.
pub fn is_valid_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
