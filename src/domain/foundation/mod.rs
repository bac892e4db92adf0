//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, authentication types and error types
//! that form the vocabulary of the hotel access domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode};
pub use ids::{EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
pub use timestamp::Timestamp;
