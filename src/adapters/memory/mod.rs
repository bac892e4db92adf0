//! In-memory adapters for the reader ports.

mod enrollment_store;
mod hotel_store;
mod session_store;

pub use enrollment_store::InMemoryEnrollmentStore;
pub use hotel_store::InMemoryHotelStore;
pub use session_store::InMemorySessionStore;
