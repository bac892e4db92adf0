//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HotelReader` - Hotel inventory queries
//! - `EnrollmentReader` - Enrollment and ticket lookups for the entitlement rule
//! - `SessionLookup` - Open session lookups by token
//! - `SessionValidator` - Bearer token validation

mod enrollment_reader;
mod hotel_reader;
mod session_lookup;
mod session_validator;

pub use enrollment_reader::EnrollmentReader;
pub use hotel_reader::HotelReader;
pub use session_lookup::SessionLookup;
pub use session_validator::SessionValidator;
