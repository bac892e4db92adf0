//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 tokens backed by an open session lookup
//! - `mock` - Test implementation that doesn't require keys or a database

mod jwt;
mod mock;

pub use jwt::{JwtSessionValidator, SessionClaims};
pub use mock::MockSessionValidator;
