//! Response DTOs for the hotel endpoints.
//!
//! Field names are camelCase and timestamps are RFC 3339 strings. The room
//! list of a single hotel is keyed `Rooms`, matching the relation name of the
//! stored model.

use serde::{Deserialize, Serialize};

use crate::domain::hotel::{Hotel, HotelWithRooms, Room};

/// One hotel, without rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.value(),
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at.to_rfc3339(),
            updated_at: hotel.updated_at.to_rfc3339(),
        }
    }
}

/// One room of a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: u32,
    pub hotel_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.value(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.value(),
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

/// A hotel with its rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: value.hotel.into(),
            rooms: value.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

/// Error body shared by every hotel endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
