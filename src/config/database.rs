//! PostgreSQL connection settings.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use super::error::ValidationError;

const MAX_POOL_SIZE: u32 = 100;

/// Connection settings for the ticketing database.
///
/// Only `url` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection before failing with 500.
    #[serde(default = "DatabaseConfig::default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    fn default_max_connections() -> u32 {
        10
    }

    fn default_acquire_timeout_secs() -> u64 {
        5
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::default_max_connections(),
            acquire_timeout_secs: Self::default_acquire_timeout_secs(),
        }
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(ValidationError::InvalidPoolSize(self.max_connections));
        }
        Ok(())
    }
}
