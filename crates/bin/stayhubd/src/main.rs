//! # stayhubd — stayhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use stayhub_adapter_http_axum::state::AppState;
use stayhub_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteAmenityRepository, SqliteCategoryRepository, SqliteRoomRepository,
};
use stayhub_app::services::amenity_service::AmenityService;
use stayhub_app::services::room_service::RoomService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let amenity_repo = SqliteAmenityRepository::new(pool.clone());
    let category_repo = SqliteCategoryRepository::new(pool.clone());
    let room_repo = SqliteRoomRepository::new(pool.clone());

    // Categories are provisioned out-of-band; a fresh install still gets
    // the two standard ones so rooms can be filed at all.
    category_repo.seed_defaults().await?;

    // Services
    let amenity_service = AmenityService::new(amenity_repo);
    let room_service = RoomService::new(
        room_repo,
        category_repo,
        SqliteAmenityRepository::new(pool),
    );

    // HTTP
    let state = AppState::new(amenity_service, room_service);
    let app = stayhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "stayhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
