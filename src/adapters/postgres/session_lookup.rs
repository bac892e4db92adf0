//! PostgreSQL implementation of SessionLookup.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SessionLookup;

/// Looks sessions up in the `"Session"` table.
#[derive(Clone)]
pub struct PostgresSessionLookup {
    pool: PgPool,
}

impl PostgresSessionLookup {
    /// Creates a new PostgresSessionLookup.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionLookup for PostgresSessionLookup {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT "userId"
            FROM "Session"
            WHERE token = $1
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch session: {}", e)))?;

        Ok(row.map(|(user_id,)| UserId::new(user_id)))
    }
}
