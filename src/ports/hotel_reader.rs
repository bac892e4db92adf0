//! Hotel reader port - read-only access to hotels and their rooms.
//!
//! Implementations only fetch; whether the caller may see the result is
//! decided before the reader is called.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::hotel::{Hotel, HotelWithRooms};

/// Reader port for hotel inventory.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// List every hotel, unfiltered and unpaginated.
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Get a hotel with its rooms in creation order.
    ///
    /// Returns `None` if no hotel has this id. A hotel without rooms is
    /// returned with an empty room list.
    async fn find_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRooms>, DomainError>;
}
