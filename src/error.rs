//! Error handler for peppermill.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashError>;

/// Errors raised while producing or checking a digest.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("operating system entropy source is unavailable")]
    EntropyUnavailable(#[from] rand::Error),

    #[error("pepper requested but the pepper ring is empty")]
    NoPepperConfigured,

    #[error("hex is not valid")]
    InvalidEncoding(#[from] hex::FromHexError),
    #[error("digest length is {value} while {expected} is expected")]
    DigestLength { value: usize, expected: usize },

    #[error("password does not match")]
    Mismatch,
}

/// Errors raised while loading the pepper configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file")]
    Io(#[from] std::io::Error),

    #[error("configuration file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("pepper at position {position} is empty")]
    EmptyPepper { position: usize },
    #[error("pepper at position {position} is a duplicate")]
    DuplicatePepper { position: usize },
}
