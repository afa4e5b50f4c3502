//! Storage port — repository traits for persistence.

use std::future::Future;

use stayhub_domain::amenity::Amenity;
use stayhub_domain::category::Category;
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::{AmenityId, CategoryId, RoomId};
use stayhub_domain::room::Room;

/// Repository for persisting and querying [`Amenity`]s.
pub trait AmenityRepository {
    /// Create a new amenity in storage.
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, StayHubError>> + Send;

    /// Get an amenity by its unique identifier.
    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, StayHubError>> + Send;

    /// Get all amenities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, StayHubError>> + Send;

    /// Update an existing amenity.
    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, StayHubError>> + Send;

    /// Delete an amenity by its unique identifier.
    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), StayHubError>> + Send;
}

/// Read access to the category catalog.
///
/// Categories are provisioned out-of-band; this core only ever reads
/// them, so the port exposes no mutation.
pub trait CategoryRepository {
    /// Get a category by its unique identifier.
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, StayHubError>> + Send;

    /// Get all categories.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, StayHubError>> + Send;
}

/// Repository for persisting and querying [`Room`]s.
///
/// A room's amenity set is part of the aggregate: `create` and `update`
/// persist it together with the room row, and reads return it populated.
pub trait RoomRepository {
    /// Create a new room in storage.
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, StayHubError>> + Send;

    /// Get a room by its unique identifier.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, StayHubError>> + Send;

    /// Get all rooms.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, StayHubError>> + Send;

    /// Update an existing room.
    fn update(&self, room: Room) -> impl Future<Output = Result<Room, StayHubError>> + Send;

    /// Delete a room by its unique identifier.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), StayHubError>> + Send;
}
