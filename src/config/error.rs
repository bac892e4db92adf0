//! Configuration errors.

use thiserror::Error;

/// Failure to read the environment into an [`AppConfig`](super::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read HOTEL_ACCESS__* settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// A setting that was read but cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("HOTEL_ACCESS__{0} must be set")]
    MissingRequired(&'static str),

    #[error("cannot bind to {0}")]
    InvalidBindAddress(String),

    #[error("request timeout of {0}s is outside 1..=300")]
    InvalidRequestTimeout(u64),

    #[error("database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("database pool size {0} is outside 1..=100")]
    InvalidPoolSize(u32),

    #[error("JWT secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),
}
