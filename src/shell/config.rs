// Runtime configuration, read from the environment.
//
// `main` loads a `.env` file first (dotenvy), so every key can live there as well.

use crate::modules::planner::adapters::outbound::event_bus_in_memory::{
    DEFAULT_CAPACITY, MAX_CAPACITY,
};
use crate::shared::infrastructure::id_generator::IdStrategy;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub id_strategy: IdStrategy,
    pub seed_sample_data: bool,
    pub notification_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            id_strategy: IdStrategy::Sequential,
            seed_sample_data: false,
            notification_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse("PORT", lookup("PORT"), defaults.port)?,
            id_strategy: parse("ID_STRATEGY", lookup("ID_STRATEGY"), defaults.id_strategy)?,
            seed_sample_data: parse_flag(
                "SEED_SAMPLE_DATA",
                lookup("SEED_SAMPLE_DATA"),
                defaults.seed_sample_data,
            )?,
            notification_capacity: parse_capacity(
                "NOTIFICATION_CAPACITY",
                lookup("NOTIFICATION_CAPACITY"),
                defaults.notification_capacity,
            )?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_capacity(
    key: &'static str,
    raw: Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    let original = raw.clone();
    match parse(key, raw, default)? {
        capacity @ 1..=MAX_CAPACITY => Ok(capacity),
        _ => Err(ConfigError::Invalid {
            key,
            value: original.unwrap_or_default(),
        }),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            key,
            value: raw.unwrap_or_default(),
        }),
    }
}
