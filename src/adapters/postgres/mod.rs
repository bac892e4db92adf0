//! PostgreSQL adapters - Database implementations of the reader ports.
//!
//! - `PostgresHotelReader` - Hotels and their rooms
//! - `PostgresEnrollmentReader` - Enrollments and tickets with their type
//! - `PostgresSessionLookup` - Session rows by token

mod enrollment_reader;
mod hotel_reader;
mod session_lookup;

pub use enrollment_reader::PostgresEnrollmentReader;
pub use hotel_reader::PostgresHotelReader;
pub use session_lookup::PostgresSessionLookup;
