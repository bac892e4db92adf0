//! Application handlers.
//!
//! Query handlers that orchestrate domain rules over the reader ports.

pub mod hotel;

pub use hotel::{
    GetHotelWithRoomsHandler, GetHotelWithRoomsQuery, HotelAccessGate, ListHotelsHandler,
    ListHotelsQuery,
};
