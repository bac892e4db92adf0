//! Hotel access error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, HotelId};
use crate::domain::ticket::{Entitlement, Ineligibility, MissingRecord};

/// Errors returned by the hotel query handlers.
///
/// A closed set: the HTTP layer matches it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotelError {
    /// The caller has no enrollment.
    #[error("Enrollment not found for user")]
    EnrollmentNotFound,

    /// The caller's enrollment has no ticket.
    #[error("Ticket not found for enrollment")]
    TicketNotFound,

    /// No hotel has the requested id.
    #[error("Hotel not found: {0}")]
    HotelNotFound(HotelId),

    /// The caller's ticket does not grant hotel access.
    #[error("{0}")]
    Unauthorized(Ineligibility),

    /// Persistence or other unexpected failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl HotelError {
    pub fn hotel_not_found(id: HotelId) -> Self {
        HotelError::HotelNotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        HotelError::Infrastructure(message.into())
    }

    /// Converts a non-granted entitlement into the matching error.
    ///
    /// Returns `None` for `Entitlement::Granted`.
    pub fn from_entitlement(entitlement: Entitlement) -> Option<Self> {
        match entitlement {
            Entitlement::Granted => None,
            Entitlement::NotFound(MissingRecord::Enrollment) => Some(HotelError::EnrollmentNotFound),
            Entitlement::NotFound(MissingRecord::Ticket) => Some(HotelError::TicketNotFound),
            Entitlement::Unauthorized(reason) => Some(HotelError::Unauthorized(reason)),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            HotelError::EnrollmentNotFound => ErrorCode::EnrollmentNotFound,
            HotelError::TicketNotFound => ErrorCode::TicketNotFound,
            HotelError::HotelNotFound(_) => ErrorCode::HotelNotFound,
            HotelError::Unauthorized(_) => ErrorCode::HotelAccessDenied,
            HotelError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for HotelError {
    fn from(err: DomainError) -> Self {
        HotelError::Infrastructure(err.to_string())
    }
}
