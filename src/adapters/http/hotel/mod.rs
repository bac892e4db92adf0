//! HTTP adapter for hotel endpoints.
//!
//! - `GET /hotels` - List hotels for a caller holding a paid hotel ticket
//! - `GET /hotels/:hotelId` - Get one hotel with its rooms

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HotelResponse, HotelWithRoomsResponse, RoomResponse};
pub use handlers::{HotelApiError, HotelAppState};
pub use routes::hotel_routes;
