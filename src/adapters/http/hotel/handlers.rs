//! HTTP handlers for hotel endpoints.
//!
//! These handlers connect Axum routes to the application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::hotel::{
    GetHotelWithRoomsHandler, GetHotelWithRoomsQuery, ListHotelsHandler, ListHotelsQuery,
};
use crate::domain::foundation::{ErrorCode, HotelId};
use crate::domain::hotel::HotelError;
use crate::ports::{EnrollmentReader, HotelReader};

use super::dto::{ErrorResponse, HotelResponse, HotelWithRoomsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the hotel routes.
#[derive(Clone)]
pub struct HotelAppState {
    pub enrollment_reader: Arc<dyn EnrollmentReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelAppState {
    pub fn new(
        enrollment_reader: Arc<dyn EnrollmentReader>,
        hotel_reader: Arc<dyn HotelReader>,
    ) -> Self {
        Self {
            enrollment_reader,
            hotel_reader,
        }
    }

    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(self.enrollment_reader.clone(), self.hotel_reader.clone())
    }

    pub fn get_hotel_with_rooms_handler(&self) -> GetHotelWithRoomsHandler {
        GetHotelWithRoomsHandler::new(self.enrollment_reader.clone(), self.hotel_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List all hotels for an entitled caller
pub async fn list_hotels(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, HotelApiError> {
    let query = ListHotelsQuery { user_id: user.id };

    let hotels = state.list_hotels_handler().handle(query).await?;

    let body: Vec<HotelResponse> = hotels.into_iter().map(HotelResponse::from).collect();
    Ok(Json(body))
}

/// GET /hotels/:hotelId - Get one hotel with its rooms
pub async fn get_hotel(
    State(state): State<HotelAppState>,
    RequireAuth(user): RequireAuth,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, HotelApiError> {
    let hotel_id: HotelId = hotel_id
        .parse()
        .map_err(|_| HotelApiError::InvalidHotelId(hotel_id))?;

    let query = GetHotelWithRoomsQuery {
        hotel_id,
        user_id: user.id,
    };

    let hotel = state.get_hotel_with_rooms_handler().handle(query).await?;

    Ok(Json(HotelWithRoomsResponse::from(hotel)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for HTTP responses.
#[derive(Debug)]
pub enum HotelApiError {
    /// The `hotelId` path segment is not an integer.
    InvalidHotelId(String),
    Hotel(HotelError),
}

impl From<HotelError> for HotelApiError {
    fn from(err: HotelError) -> Self {
        HotelApiError::Hotel(err)
    }
}

impl IntoResponse for HotelApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HotelApiError::InvalidHotelId(raw) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    ErrorCode::ValidationFailed.to_string(),
                    format!("hotelId must be an integer, got '{}'", raw),
                ),
            ),
            HotelApiError::Hotel(err) => {
                let status = match &err {
                    HotelError::EnrollmentNotFound
                    | HotelError::TicketNotFound
                    | HotelError::HotelNotFound(_) => StatusCode::NOT_FOUND,
                    HotelError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                    HotelError::Infrastructure(detail) => {
                        tracing::error!("Hotel request failed: {}", detail);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let message = match &err {
                    HotelError::Infrastructure(_) => "Internal server error".to_string(),
                    other => other.to_string(),
                };
                (status, ErrorResponse::new(err.code().to_string(), message))
            }
        };

        (status, Json(body)).into_response()
    }
}
