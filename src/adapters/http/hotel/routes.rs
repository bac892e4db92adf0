//! Axum router configuration for hotel endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_hotel, list_hotels, HotelAppState};

/// Create the hotel API router.
///
/// # Routes
///
/// Both routes expect `auth_middleware` to run first.
/// - `GET /` - List hotels
/// - `GET /:hotelId` - Get a hotel with its rooms
pub fn hotel_routes() -> Router<HotelAppState> {
    Router::new()
        .route("/", get(list_hotels))
        .route("/:hotelId", get(get_hotel))
}
