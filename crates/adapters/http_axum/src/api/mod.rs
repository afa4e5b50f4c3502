//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::get;

use stayhub_app::ports::{AmenityRepository, CategoryRepository, RoomRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<AR, CR, RR>() -> Router<AppState<AR, CR, RR>>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        // Amenities
        .route(
            "/amenities",
            get(amenities::list::<AR, CR, RR>).post(amenities::create::<AR, CR, RR>),
        )
        .route(
            "/amenities/{id}",
            get(amenities::get::<AR, CR, RR>)
                .put(amenities::update::<AR, CR, RR>)
                .delete(amenities::delete::<AR, CR, RR>),
        )
        // Rooms
        .route(
            "/rooms",
            get(rooms::list::<AR, CR, RR>).post(rooms::create::<AR, CR, RR>),
        )
        .route(
            "/rooms/{id}",
            get(rooms::get::<AR, CR, RR>)
                .put(rooms::update::<AR, CR, RR>)
                .delete(rooms::delete::<AR, CR, RR>),
        )
}
