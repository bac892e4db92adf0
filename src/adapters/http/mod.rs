//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the public surface: an unauthenticated health
//! check and the `/hotels` routes behind the bearer-token middleware.
//! The list endpoint answers on both `/hotels` and `/hotels/`.

pub mod hotel;
pub mod middleware;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use hotel::handlers::list_hotels;

pub use hotel::{hotel_routes, HotelAppState};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

async fn health() -> &'static str {
    "OK!"
}

/// Build the application router.
pub fn app_router(auth: AuthState, hotels: HotelAppState, request_timeout: Duration) -> Router {
    // Nesting `/` only registers `/hotels`, so the slash form is routed explicitly.
    let hotel_api = Router::new()
        .nest("/hotels", hotel_routes())
        .route("/hotels/", get(list_hotels))
        .with_state(hotels)
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(hotel_api)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
