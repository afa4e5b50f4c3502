//! Shared application state for axum handlers.

use std::sync::Arc;

use stayhub_app::ports::{AmenityRepository, CategoryRepository, RoomRepository};
use stayhub_app::services::amenity_service::AmenityService;
use stayhub_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<AR, CR, RR> {
    /// Amenity CRUD service.
    pub amenity_service: Arc<AmenityService<AR>>,
    /// Room CRUD service.
    pub room_service: Arc<RoomService<RR, CR, AR>>,
}

impl<AR, CR, RR> Clone for AppState<AR, CR, RR> {
    fn clone(&self) -> Self {
        Self {
            amenity_service: Arc::clone(&self.amenity_service),
            room_service: Arc::clone(&self.room_service),
        }
    }
}

impl<AR, CR, RR> AppState<AR, CR, RR>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        amenity_service: AmenityService<AR>,
        room_service: RoomService<RR, CR, AR>,
    ) -> Self {
        Self {
            amenity_service: Arc::new(amenity_service),
            room_service: Arc::new(room_service),
        }
    }
}
