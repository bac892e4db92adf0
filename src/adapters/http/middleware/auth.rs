//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that reads the injected user
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! Every hotel route is private, so a request without a token is rejected
//! here instead of reaching a handler.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser, ErrorCode};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Pull the raw token out of an `Authorization: Bearer <token>` header value.
fn bearer_token(value: &str) -> Option<&str> {
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware that validates Bearer tokens.
///
/// On success the `AuthenticatedUser` is inserted into request extensions.
/// A missing header, a bad token or an unknown session answers 401; a session
/// store outage answers 503.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token);

    let Some(token) = token else {
        tracing::debug!("Request without bearer token");
        return auth_error_response(&AuthError::MissingToken);
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => auth_error_response(&e),
    }
}

fn auth_error_response(error: &AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
        AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
        AuthError::SessionNotFound => (StatusCode::UNAUTHORIZED, "Session not found"),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
    };

    (
        status,
        Json(serde_json::json!({
            "code": ErrorCode::Unauthenticated.to_string(),
            "message": message
        })),
    )
        .into_response()
}

/// Extractor that requires authentication.
///
/// If no user is in the request extensions (the route is not behind
/// `auth_middleware`), returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No authenticated user was attached to the request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => auth_error_response(&AuthError::MissingToken),
        }
    }
}
