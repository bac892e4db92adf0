//! GetHotelWithRoomsHandler - Query handler for one hotel and its rooms.

use std::sync::Arc;

use super::HotelAccessGate;
use crate::domain::foundation::{HotelId, UserId};
use crate::domain::hotel::{HotelError, HotelWithRooms};
use crate::ports::{EnrollmentReader, HotelReader};

/// Query to get a hotel by ID.
#[derive(Debug, Clone)]
pub struct GetHotelWithRoomsQuery {
    pub hotel_id: HotelId,
    pub user_id: UserId,
}

/// Handler for retrieving a hotel's room inventory.
pub struct GetHotelWithRoomsHandler {
    gate: HotelAccessGate,
    hotels: Arc<dyn HotelReader>,
}

impl GetHotelWithRoomsHandler {
    pub fn new(enrollments: Arc<dyn EnrollmentReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            gate: HotelAccessGate::new(enrollments),
            hotels,
        }
    }

    pub async fn handle(&self, query: GetHotelWithRoomsQuery) -> Result<HotelWithRooms, HotelError> {
        // Entitlement is decided before the hotel id is looked up.
        self.gate.check(query.user_id).await?;

        let hotel = self
            .hotels
            .find_with_rooms(query.hotel_id)
            .await?
            .ok_or_else(|| HotelError::hotel_not_found(query.hotel_id))?;
        tracing::debug!(hotel_id = %query.hotel_id, rooms = hotel.room_count(), "Loaded hotel");

        Ok(hotel)
    }
}
