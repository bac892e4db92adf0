//! Ticket domain module.
//!
//! Read-side view of enrollments and tickets plus the hotel entitlement rule.
//!
//! # Module Structure
//!
//! - `records` - Enrollment, Ticket and TicketType records
//! - `status` - TicketStatus payment states
//! - `entitlement` - Pure evaluation of hotel access

mod entitlement;
mod records;
mod status;

pub use entitlement::{evaluate, Entitlement, Ineligibility, MissingRecord};
pub use records::{Enrollment, Ticket, TicketType};
pub use status::TicketStatus;
