//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `ticket` - Enrollments, tickets and the hotel entitlement rule
//! - `hotel` - Hotels, rooms and hotel access errors

pub mod foundation;
pub mod hotel;
pub mod ticket;
