//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use stayhub_app::ports::{AmenityRepository, CategoryRepository, RoomRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes under `/api` and a `/health` probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<AR, CR, RR>(state: AppState<AR, CR, RR>) -> Router
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
