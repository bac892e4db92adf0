//! HTTP listener settings.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where the API listens and how it logs.
///
/// Every field has a default, so the whole `server` section may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Upper bound on a single `/hotels` request, in seconds.
    pub request_timeout_secs: u64,
}

/// Deployment environment. Production switches logs to JSON and
/// enforces a long token secret.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            log_level: "info,hotel_access=debug,sqlx=warn".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidBindAddress(format!("{}:0", self.host)));
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidRequestTimeout(self.request_timeout_secs));
        }
        self.socket_addr().map(|_| ())
    }
}
