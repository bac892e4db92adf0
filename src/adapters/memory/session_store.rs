//! In-memory session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SessionLookup;

/// Token to user map standing in for the sessions table.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session opened by `user_id` with `token`.
    pub async fn open_session(&self, user_id: UserId, token: impl Into<String>) {
        self.sessions.write().await.insert(token.into(), user_id);
    }

    /// Drop the session for `token`, if any.
    pub async fn close_session(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

#[async_trait]
impl SessionLookup for InMemorySessionStore {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        Ok(self.sessions.read().await.get(token).copied())
    }
}
