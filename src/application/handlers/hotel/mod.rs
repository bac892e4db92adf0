//! Hotel query handlers.
//!
//! Both queries run the same entitlement gate before touching hotel data.

mod access_gate;
mod get_hotel_with_rooms;
mod list_hotels;

#[cfg(test)]
mod test_support;

pub use access_gate::HotelAccessGate;
pub use get_hotel_with_rooms::{GetHotelWithRoomsHandler, GetHotelWithRoomsQuery};
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery};
