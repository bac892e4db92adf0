//! Hotel and room records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HotelId, RoomId, Timestamp};

/// A hotel available to ticket holders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// URL of the hotel's cover image.
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A bookable room inside a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Number of guests the room sleeps.
    pub capacity: u32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel together with its rooms, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    /// Returns the number of rooms in the hotel.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
