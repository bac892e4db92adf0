//! HS256 JWT session validator.
//!
//! Validates bearer tokens by:
//!
//! 1. Verifying the HS256 signature with the configured shared secret
//! 2. Checking `exp` when the token carries one
//! 3. Reading the numeric `userId` claim
//! 4. Requiring an open session created with this exact token
//!
//! The caller is the user that owns the session row.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionLookup, SessionValidator};

/// Claims carried by session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    /// Issued at (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Expiry (seconds since epoch). Tokens without it never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// `SessionValidator` backed by a shared HS256 secret and a session lookup.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionLookup>,
}

impl JwtSessionValidator {
    /// Create a validator for tokens signed with `secret`.
    pub fn new(secret: &SecretString, sessions: Arc<dyn SessionLookup>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::warn!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let session_user = self
            .sessions
            .find_user_by_token(token)
            .await
            .map_err(|e| {
                tracing::error!("Session lookup failed: {}", e);
                AuthError::service_unavailable(e.message)
            })?
            .ok_or_else(|| {
                tracing::warn!(user_id = claims.user_id, "No session for token");
                AuthError::SessionNotFound
            })?;

        if session_user.value() != claims.user_id {
            tracing::warn!(
                claim = claims.user_id,
                session = %session_user,
                "Session owner does not match token claim"
            );
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(UserId::new(claims.user_id)))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator").finish_non_exhaustive()
    }
}
