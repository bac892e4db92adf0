//! PostgreSQL implementation of HotelReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, HotelId, RoomId, Timestamp};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

/// PostgreSQL implementation of the HotelReader port.
#[derive(Clone)]
pub struct PostgresHotelReader {
    pool: PgPool,
}

impl PostgresHotelReader {
    /// Creates a new PostgresHotelReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: HotelId::new(row.id),
            name: row.name,
            image: row.image,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

impl TryFrom<RoomRow> for Room {
    type Error = DomainError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let capacity = u32::try_from(row.capacity).map_err(|_| {
            DomainError::database(format!("Invalid room capacity: {}", row.capacity))
                .with_detail("room_id", row.id.to_string())
        })?;

        Ok(Room {
            id: RoomId::new(row.id),
            name: row.name,
            capacity,
            hotel_id: HotelId::new(row.hotel_id),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl HotelReader for PostgresHotelReader {
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list hotels: {}", e)))?;

        tracing::debug!(count = rows.len(), "Loaded hotels");

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel = sqlx::query_as::<_, HotelRow>(
            r#"
            SELECT id, name, image, "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Hotel"
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch hotel: {}", e)))?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, name, capacity, "hotelId" AS hotel_id,
                   "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY id
            "#,
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch rooms: {}", e)))?
        .into_iter()
        .map(Room::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms,
        }))
    }
}
