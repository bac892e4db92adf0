//! Hotel domain module.
//!
//! - `records` - Hotel, Room and HotelWithRooms
//! - `errors` - HotelError returned by the hotel queries

mod errors;
mod records;

pub use errors::HotelError;
pub use records::{Hotel, HotelWithRooms, Room};
