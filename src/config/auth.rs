//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Session token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret session tokens are signed with.
    pub jwt_secret: SecretString,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
        }
    }

    /// Validate authentication configuration
    ///
    /// The secret is always required; production also enforces a minimum length.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        Ok(())
    }
}
