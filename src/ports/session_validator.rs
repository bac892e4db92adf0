//! Session validation port for bearer token validation.
//!
//! This port defines the contract for turning the raw token of an
//! `Authorization: Bearer` header into a caller identity. The HTTP middleware
//! depends only on this trait.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::SessionNotFound` when the token has no open session
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix) and return its user.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Simple mock implementation for testing the trait
    struct TestSessionValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    impl TestSessionValidator {
        fn new() -> Self {
            Self {
                tokens: RwLock::new(HashMap::new()),
            }
        }

        fn add_valid_token(&self, token: &str, user: AuthenticatedUser) {
            self.tokens.write().unwrap().insert(token.to_string(), user);
        }
    }

    #[async_trait]
    impl SessionValidator for TestSessionValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn session_validator_returns_user_for_valid_token() {
        let validator = TestSessionValidator::new();
        validator.add_valid_token("valid-token-123", AuthenticatedUser::new(UserId::new(3)));

        let user = validator.validate("valid-token-123").await.unwrap();

        assert_eq!(user.id, UserId::new(3));
    }

    #[tokio::test]
    async fn session_validator_returns_error_for_invalid_token() {
        let validator = TestSessionValidator::new();

        let result = validator.validate("invalid-token").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn session_validator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
    }
}
