//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session token validation (JWT, mock)
//! - `http` - REST API (axum)
//! - `memory` - In-memory readers for tests and local runs
//! - `postgres` - PostgreSQL readers

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
