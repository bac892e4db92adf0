//! Hotel entitlement rule.
//!
//! A user may see hotel data iff they have an enrollment, that enrollment has a
//! ticket, the ticket is paid, and its type includes a hotel stay. The missing
//! record cases are reported separately from the "has a ticket but it does not
//! qualify" case so the HTTP layer can answer 404 and 401 respectively.

use serde::Serialize;
use std::fmt;

use super::{Enrollment, Ticket};

/// Record whose absence blocked the entitlement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRecord {
    Enrollment,
    Ticket,
}

impl fmt::Display for MissingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRecord::Enrollment => f.write_str("enrollment"),
            MissingRecord::Ticket => f.write_str("ticket"),
        }
    }
}

/// Why an existing ticket does not grant hotel access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ineligibility {
    /// The ticket is still reserved.
    TicketNotPaid,
    /// The ticket type does not bundle a hotel stay.
    HotelNotIncluded,
}

impl Ineligibility {
    /// Get a user-facing message for the denial.
    pub fn user_message(&self) -> &'static str {
        match self {
            Ineligibility::TicketNotPaid => "Ticket must be paid before hotels can be viewed",
            Ineligibility::HotelNotIncluded => "Ticket type does not include hotel accommodation",
        }
    }
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Outcome of the entitlement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entitlement {
    Granted,
    NotFound(MissingRecord),
    Unauthorized(Ineligibility),
}

impl Entitlement {
    /// Returns true if access is granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Entitlement::Granted)
    }
}

/// Decides hotel access from already-fetched records.
///
/// A ticket passed without an enrollment is ignored: enrollment absence wins.
/// When a ticket fails both conditions, `TicketNotPaid` is reported.
pub fn evaluate(enrollment: Option<&Enrollment>, ticket: Option<&Ticket>) -> Entitlement {
    if enrollment.is_none() {
        return Entitlement::NotFound(MissingRecord::Enrollment);
    }
    let Some(ticket) = ticket else {
        return Entitlement::NotFound(MissingRecord::Ticket);
    };
    if !ticket.is_paid() {
        return Entitlement::Unauthorized(Ineligibility::TicketNotPaid);
    }
    if !ticket.includes_hotel() {
        return Entitlement::Unauthorized(Ineligibility::HotelNotIncluded);
    }
    Entitlement::Granted
}
