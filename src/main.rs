use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hotel_access::adapters::auth::JwtSessionValidator;
use hotel_access::adapters::http::{app_router, AuthState, HotelAppState};
use hotel_access::adapters::postgres::{
    PostgresEnrollmentReader, PostgresHotelReader, PostgresSessionLookup,
};
use hotel_access::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logger(&config)?;
    config.validate().context("Invalid configuration")?;

    bootstrap(config).await
}

fn init_logger(config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?;
    }

    Ok(())
}

async fn bootstrap(config: AppConfig) -> Result<()> {
    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let sessions = Arc::new(PostgresSessionLookup::new(pool.clone()));
    let validator: AuthState = Arc::new(JwtSessionValidator::new(&config.auth.jwt_secret, sessions));
    let hotels = HotelAppState::new(
        Arc::new(PostgresEnrollmentReader::new(pool.clone())),
        Arc::new(PostgresHotelReader::new(pool)),
    );

    let app = app_router(validator, hotels, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| tracing::error!(error.message = %e, "Server stopped"))
}
