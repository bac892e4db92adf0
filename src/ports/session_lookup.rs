//! Session lookup port.
//!
//! A signed token is only honoured while a session row for it exists. This
//! port answers "which user opened the session for this token".

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Read access to open sessions.
#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// Find the user that owns the session created with `token`.
    ///
    /// Returns `Ok(None)` when no session uses this token.
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError>;
}
