//! Hotel Access - hotel listings for attendees holding a paid, hotel-inclusive ticket.
//!
//! Hexagonal layout: `domain` holds the records and the entitlement rule,
//! `ports` the reader traits, `application` the query handlers, and
//! `adapters` the PostgreSQL, in-memory, auth and HTTP implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
