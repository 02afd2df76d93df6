// Id generation strategies.
//
// Exactly one generator is injected into the store per process, so every collection
// follows the same policy. Generated ids are never reused, deletes included.

pub mod sequential;
pub mod timestamp;
pub mod uuid_v7;

use std::str::FromStr;
use thiserror::Error;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Sequential,
    Timestamp,
    UuidV7,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown id strategy: {0}")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "timestamp" => Ok(Self::Timestamp),
            "uuid" | "uuid_v7" => Ok(Self::UuidV7),
            other => Err(UnknownIdStrategy(other.to_string())),
        }
    }
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::new(sequential::SequentialIdGenerator::new()),
            Self::Timestamp => Box::new(timestamp::TimestampIdGenerator::new()),
            Self::UuidV7 => Box::new(uuid_v7::UuidV7IdGenerator),
        }
    }
}
