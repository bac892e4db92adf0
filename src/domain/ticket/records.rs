//! Enrollment and ticket records as read from persistence.
//!
//! These are created by the onboarding and ticketing flows; the hotel domain
//! only ever reads them.

use serde::{Deserialize, Serialize};

use super::TicketStatus;
use crate::domain::foundation::{EnrollmentId, TicketId, TicketTypeId, Timestamp, UserId};

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Ticket category, including whether it bundles hotel accommodation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in whole currency units.
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// A ticket joined with its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ticket {
    /// Returns true if the ticket has been paid for.
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    /// Returns true if the ticket's type bundles a hotel stay.
    pub fn includes_hotel(&self) -> bool {
        self.ticket_type.includes_hotel
    }
}
