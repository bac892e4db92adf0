//! End-to-end tests for the hotel endpoints.
//!
//! The full router runs against in-memory readers and the real JWT validator
//! backed by an in-memory session store, so every request goes through token
//! verification, session lookup, the entitlement rule and the JSON mapping.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use hotel_access::adapters::auth::{JwtSessionValidator, SessionClaims};
use hotel_access::adapters::http::{app_router, HotelAppState};
use hotel_access::adapters::memory::{
    InMemoryEnrollmentStore, InMemoryHotelStore, InMemorySessionStore,
};
use hotel_access::domain::foundation::{TicketTypeId, UserId};
use hotel_access::domain::ticket::{TicketStatus, TicketType};

const SECRET: &str = "integration-secret-with-at-least-32-bytes";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    sessions: InMemorySessionStore,
    enrollments: InMemoryEnrollmentStore,
    hotels: InMemoryHotelStore,
}

impl TestApp {
    fn new() -> Self {
        let sessions = InMemorySessionStore::new();
        let enrollments = InMemoryEnrollmentStore::new();
        let hotels = InMemoryHotelStore::new();

        let validator = JwtSessionValidator::new(
            &SecretString::new(SECRET.to_string()),
            Arc::new(sessions.clone()),
        );
        let state = HotelAppState::new(Arc::new(enrollments.clone()), Arc::new(hotels.clone()));
        let router = app_router(Arc::new(validator), state, Duration::from_secs(5));

        Self {
            router,
            sessions,
            enrollments,
            hotels,
        }
    }

    /// Sign a token for `user_id` and open a session for it.
    async fn login(&self, user_id: i32) -> String {
        let token = sign(user_id);
        self.sessions.open_session(UserId::new(user_id), token.clone()).await;
        token
    }

    /// Enroll `user_id` and give them a ticket.
    async fn give_ticket(&self, user_id: i32, status: TicketStatus, includes_hotel: bool) {
        let enrollment = self
            .enrollments
            .create_enrollment(UserId::new(user_id), format!("User {}", user_id))
            .await;
        self.enrollments
            .create_ticket(enrollment.id, ticket_type(includes_hotel), status)
            .await;
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

fn sign(user_id: i32) -> String {
    let claims = SessionClaims {
        user_id,
        iat: Some(chrono::Utc::now().timestamp() as u64),
        exp: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn ticket_type(includes_hotel: bool) -> TicketType {
    TicketType {
        id: TicketTypeId::new(if includes_hotel { 2 } else { 1 }),
        name: if includes_hotel { "With hotel" } else { "No hotel" }.to_string(),
        price: if includes_hotel { 600 } else { 250 },
        is_remote: false,
        includes_hotel,
    }
}

fn assert_timestamp(value: &Value) {
    let text = value.as_str().expect("timestamp should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(text).is_ok(),
        "not RFC 3339: {}",
        text
    );
}

fn assert_hotel_shape(hotel: &Value) {
    assert!(hotel["id"].is_i64());
    assert!(hotel["name"].is_string());
    assert!(hotel["image"].is_string());
    assert_timestamp(&hotel["createdAt"]);
    assert_timestamp(&hotel["updatedAt"]);
}

// =============================================================================
// GET /hotels - Authentication
// =============================================================================

#[tokio::test]
async fn list_without_token_is_401() {
    let app = TestApp::new();

    let (status, _) = app.get("/hotels", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_with_invalid_token_is_401() {
    let app = TestApp::new();

    let (status, _) = app.get("/hotels", Some("not.a.token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_with_token_but_no_session_is_401() {
    let app = TestApp::new();
    let token = sign(1);

    let (status, _) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// GET /hotels - Entitlement
// =============================================================================

#[tokio::test]
async fn list_without_enrollment_is_404() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ENROLLMENT_NOT_FOUND");
}

#[tokio::test]
async fn list_without_ticket_is_404() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.enrollments
        .create_enrollment(UserId::new(1), "User 1")
        .await;

    let (status, body) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TICKET_NOT_FOUND");
}

#[tokio::test]
async fn list_with_reserved_hotel_ticket_is_401() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Reserved, true).await;
    app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "HOTEL_ACCESS_DENIED");
}

#[tokio::test]
async fn list_with_paid_ticket_without_hotel_is_401() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, false).await;
    app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "HOTEL_ACCESS_DENIED");
}

#[tokio::test]
async fn list_with_paid_hotel_ticket_returns_hotels() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;
    let created = app.hotels.create_hotel("Beach Palace", "https://img/1").await;
    app.hotels.create_hotel("Mountain Lodge", "https://img/2").await;

    let (status, body) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let hotels = body.as_array().expect("array body");
    assert_eq!(hotels.len(), 2);
    hotels.iter().for_each(assert_hotel_shape);
    assert_eq!(hotels[0]["id"], created.id.value());
    assert_eq!(hotels[0]["name"], "Beach Palace");
    assert!(hotels[0].get("Rooms").is_none());
}

#[tokio::test]
async fn list_with_cancelled_hotel_ticket_is_401() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Other("CANCELLED".to_string()), true)
        .await;
    app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "HOTEL_ACCESS_DENIED");
}

#[tokio::test]
async fn list_checks_only_the_callers_ticket() {
    let app = TestApp::new();
    app.give_ticket(1, TicketStatus::Paid, true).await;
    let token = app.login(2).await;
    app.give_ticket(2, TicketStatus::Reserved, true).await;

    let (status, _) = app.get("/hotels", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// GET /hotels/ - Trailing slash
// =============================================================================

#[tokio::test]
async fn list_with_trailing_slash_without_token_is_401() {
    let app = TestApp::new();

    let (status, _) = app.get("/hotels/", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_with_trailing_slash_without_enrollment_is_404() {
    let app = TestApp::new();
    let token = app.login(1).await;

    let (status, body) = app.get("/hotels/", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ENROLLMENT_NOT_FOUND");
}

#[tokio::test]
async fn list_with_trailing_slash_returns_hotels() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;
    app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get("/hotels/", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let hotels = body.as_array().expect("array body");
    assert_eq!(hotels.len(), 1);
    assert_hotel_shape(&hotels[0]);
    assert_eq!(hotels[0]["name"], "Beach Palace");
}

// =============================================================================
// GET /hotels/:hotelId
// =============================================================================

#[tokio::test]
async fn get_hotel_without_token_is_401() {
    let app = TestApp::new();

    let (status, _) = app.get("/hotels/1", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_hotel_without_enrollment_is_404() {
    let app = TestApp::new();
    let token = app.login(1).await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ENROLLMENT_NOT_FOUND");
}

#[tokio::test]
async fn get_hotel_without_ticket_is_404() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.enrollments
        .create_enrollment(UserId::new(1), "User 1")
        .await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TICKET_NOT_FOUND");
}

#[tokio::test]
async fn get_hotel_with_paid_ticket_without_hotel_is_401() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, false).await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "HOTEL_ACCESS_DENIED");
}

#[tokio::test]
async fn get_hotel_with_refunded_ticket_is_401() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Other("REFUNDED".to_string()), true)
        .await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "HOTEL_ACCESS_DENIED");
}

#[tokio::test]
async fn get_hotel_with_unpaid_ticket_is_401() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Reserved, true).await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, _) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_hotel_without_rooms_returns_empty_rooms() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;

    let (status, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_hotel_shape(&body);
    assert_eq!(body["Rooms"], serde_json::json!([]));
}

#[tokio::test]
async fn get_hotel_returns_its_rooms() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;
    let hotel = app.hotels.create_hotel("Beach Palace", "https://img/1").await;
    let other = app.hotels.create_hotel("Mountain Lodge", "https://img/2").await;
    app.hotels.create_room(hotel.id, "101", 1).await;
    app.hotels.create_room(other.id, "201", 2).await;
    app.hotels.create_room(hotel.id, "102", 3).await;

    let (status, body) = app.get(&format!("/hotels/{}", hotel.id), Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], hotel.id.value());
    let rooms = body["Rooms"].as_array().expect("Rooms array");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["name"], "101");
    assert_eq!(rooms[1]["name"], "102");
    for room in rooms {
        assert!(room["id"].is_i64());
        assert!(room["capacity"].is_u64());
        assert_eq!(room["hotelId"], hotel.id.value());
        assert_timestamp(&room["createdAt"]);
        assert_timestamp(&room["updatedAt"]);
    }
}

#[tokio::test]
async fn get_unknown_hotel_is_404() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;

    let (status, body) = app.get("/hotels/4242", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "HOTEL_NOT_FOUND");
}

#[tokio::test]
async fn get_hotel_with_non_integer_id_is_400() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;

    let (status, body) = app.get("/hotels/beach", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn closed_session_stops_access() {
    let app = TestApp::new();
    let token = app.login(1).await;
    app.give_ticket(1, TicketStatus::Paid, true).await;

    let (status, _) = app.get("/hotels", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    app.sessions.close_session(&token).await;

    let (status, _) = app.get("/hotels", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
