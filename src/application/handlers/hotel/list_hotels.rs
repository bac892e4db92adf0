//! ListHotelsHandler - Query handler for listing hotels.

use std::sync::Arc;

use super::HotelAccessGate;
use crate::domain::foundation::UserId;
use crate::domain::hotel::{Hotel, HotelError};
use crate::ports::{EnrollmentReader, HotelReader};

/// Query to list every hotel on behalf of a user.
#[derive(Debug, Clone)]
pub struct ListHotelsQuery {
    pub user_id: UserId,
}

/// Handler for listing hotels to entitled users.
pub struct ListHotelsHandler {
    gate: HotelAccessGate,
    hotels: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
    pub fn new(enrollments: Arc<dyn EnrollmentReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            gate: HotelAccessGate::new(enrollments),
            hotels,
        }
    }

    pub async fn handle(&self, query: ListHotelsQuery) -> Result<Vec<Hotel>, HotelError> {
        self.gate.check(query.user_id).await?;

        let hotels = self.hotels.list_all().await?;
        tracing::debug!(user_id = %query.user_id, count = hotels.len(), "Listed hotels");

        Ok(hotels)
    }
}
