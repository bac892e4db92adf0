//! Authentication types for the domain layer.
//!
//! These types represent the caller resolved from a bearer token. Any
//! `SessionValidator` implementation can populate them; nothing here knows
//! about JWTs or the sessions table.
//!
//! `AuthError` is separate from the hotel entitlement errors:
//! both surface as HTTP 401, but "who are you" and "you may not see hotels"
//! are different failures.

use super::UserId;
use thiserror::Error;

/// Caller identity resolved from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user the session belongs to.
    pub id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token is malformed or has an invalid signature.
    #[error("Invalid token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token verified but no session was opened with it.
    #[error("No session for token")]
    SessionNotFound,

    /// The session store could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
