//! Mock session validator for testing.
//!
//! Implements the `SessionValidator` port without signing keys or a session
//! table.
//!
//! # Example
//!
//! ```ignore
//! use hotel_access::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("valid-token", 42);
//! let user = validator.validate("valid-token").await?;
//! assert_eq!(user.id.value(), 42);
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
        self
    }

    /// Adds a valid token for the user with the given id.
    pub fn with_test_user(self, token: impl Into<String>, user_id: i32) -> Self {
        self.with_user(token, AuthenticatedUser::new(UserId::new(user_id)))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
