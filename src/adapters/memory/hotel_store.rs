//! In-memory hotel store.
//!
//! Implements `HotelReader` over vectors. Useful for tests and local runs
//! without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, HotelId, RoomId, Timestamp};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

#[derive(Debug, Default)]
struct Tables {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    next_hotel_id: i32,
    next_room_id: i32,
}

/// In-memory storage for hotels and rooms.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryHotelStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a hotel with the next free id and return it.
    pub async fn create_hotel(&self, name: impl Into<String>, image: impl Into<String>) -> Hotel {
        let mut tables = self.tables.write().await;
        tables.next_hotel_id += 1;
        let now = Timestamp::now();
        let hotel = Hotel {
            id: HotelId::new(tables.next_hotel_id),
            name: name.into(),
            image: image.into(),
            created_at: now,
            updated_at: now,
        };
        tables.hotels.push(hotel.clone());
        hotel
    }

    /// Insert a room into an existing or future hotel and return it.
    pub async fn create_room(
        &self,
        hotel_id: HotelId,
        name: impl Into<String>,
        capacity: u32,
    ) -> Room {
        let mut tables = self.tables.write().await;
        tables.next_room_id += 1;
        let now = Timestamp::now();
        let room = Room {
            id: RoomId::new(tables.next_room_id),
            name: name.into(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        tables.rooms.push(room.clone());
        room
    }
}

#[async_trait]
impl HotelReader for InMemoryHotelStore {
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError> {
        Ok(self.tables.read().await.hotels.clone())
    }

    async fn find_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRooms>, DomainError> {
        let tables = self.tables.read().await;
        let Some(hotel) = tables.hotels.iter().find(|h| h.id == id) else {
            return Ok(None);
        };

        let mut rooms: Vec<Room> = tables
            .rooms
            .iter()
            .filter(|r| r.hotel_id == id)
            .cloned()
            .collect();
        rooms.sort_by_key(|r| r.id);

        Ok(Some(HotelWithRooms {
            hotel: hotel.clone(),
            rooms,
        }))
    }
}
