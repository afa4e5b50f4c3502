//! Room service — use-cases for managing room listings.
//!
//! Room creation and update resolve their category and amenity references
//! before anything is persisted, so a bad reference leaves the store
//! untouched.

use stayhub_domain::amenity::Amenity;
use stayhub_domain::category::{Category, CategoryKind};
use stayhub_domain::error::{NotFoundError, RequestError, StayHubError};
use stayhub_domain::id::{AmenityId, CategoryId, RoomId};
use stayhub_domain::room::{Room, RoomDetail, RoomPatch};
use stayhub_domain::time::now;

use crate::ports::{AmenityRepository, CategoryRepository, RoomRepository};

/// Application service for room CRUD operations.
///
/// Needs the category and amenity repositories besides its own: room
/// writes validate cross-references against both.
pub struct RoomService<RR, CR, AR> {
    rooms: RR,
    categories: CR,
    amenities: AR,
}

impl<RR, CR, AR> RoomService<RR, CR, AR>
where
    RR: RoomRepository,
    CR: CategoryRepository,
    AR: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: RR, categories: CR, amenities: AR) -> Self {
        Self {
            rooms,
            categories,
            amenities,
        }
    }

    /// Create a new room. The caller binds the owner and category into
    /// `room` server-side; this method verifies the category exists and
    /// classifies rooms, verifies every referenced amenity exists, then
    /// persists and returns the detail projection.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Request`] for a missing category, a
    /// category of the wrong kind, or a missing amenity reference;
    /// [`StayHubError::Validation`] if field invariants fail; or a
    /// storage error from the repository.
    pub async fn create_room(&self, room: Room) -> Result<RoomDetail, StayHubError> {
        let category = self.resolve_category(room.category_id).await?;
        let amenities = self.resolve_amenities(&room.amenity_ids).await?;
        room.validate()?;

        let created = self.rooms.create(room).await?;
        tracing::debug!(room = %created.id, owner = %created.owner_id, "room created");
        Ok(RoomDetail::assemble(created, Some(category), amenities))
    }

    /// Look up a room by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, StayHubError> {
        self.rooms.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, StayHubError> {
        self.rooms.get_all().await
    }

    /// Look up a room and assemble its detail projection.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    pub async fn room_detail(&self, id: RoomId) -> Result<RoomDetail, StayHubError> {
        let room = self.get_room(id).await?;
        self.detail(room).await
    }

    /// Partially update an existing room: provided fields are merged into
    /// the stored record. A changed category or amenity set is re-validated
    /// exactly like at creation. The owner is not patchable.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] if the room does not exist,
    /// [`StayHubError::Request`] for bad references,
    /// [`StayHubError::Validation`] if the merged record is invalid, or a
    /// storage error from the repository.
    pub async fn update_room(
        &self,
        id: RoomId,
        patch: RoomPatch,
    ) -> Result<RoomDetail, StayHubError> {
        let mut room = self.get_room(id).await?;

        if let Some(category_id) = patch.category_id {
            self.resolve_category(category_id).await?;
        }
        if let Some(amenity_ids) = &patch.amenity_ids {
            self.resolve_amenities(amenity_ids).await?;
        }

        room.apply(patch, now());
        room.validate()?;

        let updated = self.rooms.update(room).await?;
        self.detail(updated).await
    }

    /// Delete a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] if the room does not exist,
    /// or a storage error propagated from the repository.
    pub async fn delete_room(&self, id: RoomId) -> Result<(), StayHubError> {
        self.get_room(id).await?;
        self.rooms.delete(id).await?;
        tracing::debug!(room = %id, "room deleted");
        Ok(())
    }

    /// Strict category resolution used on the write path.
    async fn resolve_category(&self, id: CategoryId) -> Result<Category, StayHubError> {
        let category = self
            .categories
            .get_by_id(id)
            .await?
            .ok_or(RequestError::CategoryNotFound)?;
        if category.kind == CategoryKind::Experiences {
            return Err(RequestError::CategoryKindMismatch.into());
        }
        Ok(category)
    }

    /// Strict amenity resolution used on the write path. Fails on the
    /// first missing reference.
    async fn resolve_amenities(&self, ids: &[AmenityId]) -> Result<Vec<Amenity>, StayHubError> {
        let mut amenities = Vec::with_capacity(ids.len());
        for id in ids {
            match self.amenities.get_by_id(*id).await? {
                Some(amenity) => amenities.push(amenity),
                None => return Err(RequestError::AmenityNotFound(id.to_string()).into()),
            }
        }
        Ok(amenities)
    }

    /// Tolerant detail assembly used on the read path: a category retired
    /// after the room was filed is rendered as `null`, and dangling
    /// amenity references are skipped.
    async fn detail(&self, room: Room) -> Result<RoomDetail, StayHubError> {
        let category = self.categories.get_by_id(room.category_id).await?;
        let mut amenities = Vec::with_capacity(room.amenity_ids.len());
        for id in &room.amenity_ids {
            if let Some(amenity) = self.amenities.get_by_id(*id).await? {
                amenities.push(amenity);
            }
        }
        Ok(RoomDetail::assemble(room, category, amenities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;
    use stayhub_domain::error::ValidationError;
    use stayhub_domain::id::UserId;

    struct InMemoryRoomRepo {
        store: Mutex<HashMap<RoomId, Room>>,
    }

    impl Default for InMemoryRoomRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl RoomRepository for InMemoryRoomRepo {
        fn create(&self, room: Room) -> impl Future<Output = Result<Room, StayHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(room.id, room.clone());
            async { Ok(room) }
        }

        fn get_by_id(
            &self,
            id: RoomId,
        ) -> impl Future<Output = Result<Option<Room>, StayHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, StayHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Room> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(&self, room: Room) -> impl Future<Output = Result<Room, StayHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(room.id, room.clone());
            async { Ok(room) }
        }

        fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), StayHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    struct InMemoryCategoryRepo {
        store: Mutex<HashMap<CategoryId, Category>>,
    }

    impl InMemoryCategoryRepo {
        fn with(categories: Vec<Category>) -> Self {
            Self {
                store: Mutex::new(categories.into_iter().map(|c| (c.id, c)).collect()),
            }
        }
    }

    impl CategoryRepository for InMemoryCategoryRepo {
        fn get_by_id(
            &self,
            id: CategoryId,
        ) -> impl Future<Output = Result<Option<Category>, StayHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, StayHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Category> = store.values().cloned().collect();
            async { Ok(result) }
        }
    }

    struct InMemoryAmenityRepo {
        store: Mutex<HashMap<AmenityId, Amenity>>,
    }

    impl InMemoryAmenityRepo {
        fn with(amenities: Vec<Amenity>) -> Self {
            Self {
                store: Mutex::new(amenities.into_iter().map(|a| (a.id, a)).collect()),
            }
        }
    }

    impl AmenityRepository for InMemoryAmenityRepo {
        fn create(
            &self,
            amenity: Amenity,
        ) -> impl Future<Output = Result<Amenity, StayHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(amenity.id, amenity.clone());
            async { Ok(amenity) }
        }

        fn get_by_id(
            &self,
            id: AmenityId,
        ) -> impl Future<Output = Result<Option<Amenity>, StayHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, StayHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Amenity> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            amenity: Amenity,
        ) -> impl Future<Output = Result<Amenity, StayHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(amenity.id, amenity.clone());
            async { Ok(amenity) }
        }

        fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), StayHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    struct Fixture {
        svc: RoomService<InMemoryRoomRepo, InMemoryCategoryRepo, InMemoryAmenityRepo>,
        rooms_category: Category,
        experiences_category: Category,
        wifi: Amenity,
    }

    fn fixture() -> Fixture {
        let rooms_category = Category::new("Tiny homes", CategoryKind::Rooms);
        let experiences_category = Category::new("Surf lessons", CategoryKind::Experiences);
        let wifi = Amenity::builder().name("Wifi").build().unwrap();

        let svc = RoomService::new(
            InMemoryRoomRepo::default(),
            InMemoryCategoryRepo::with(vec![
                rooms_category.clone(),
                experiences_category.clone(),
            ]),
            InMemoryAmenityRepo::with(vec![wifi.clone()]),
        );

        Fixture {
            svc,
            rooms_category,
            experiences_category,
            wifi,
        }
    }

    fn draft(category: CategoryId, amenities: Vec<AmenityId>) -> Room {
        Room::builder(UserId::new(), category)
            .name("Seaside flat")
            .price(120)
            .city("Lisbon")
            .amenities(amenities)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_room_and_attach_checked_amenities() {
        let f = fixture();
        let room = draft(f.rooms_category.id, vec![f.wifi.id]);
        let id = room.id;

        let detail = f.svc.create_room(room).await.unwrap();

        assert_eq!(detail.id, id);
        assert_eq!(detail.category.as_ref().map(|c| c.id), Some(f.rooms_category.id));
        assert_eq!(detail.amenities.len(), 1);
        assert_eq!(detail.amenities[0].name, "Wifi");

        let stored = f.svc.get_room(id).await.unwrap();
        assert_eq!(stored.amenity_ids, vec![f.wifi.id]);
    }

    #[tokio::test]
    async fn should_reject_create_when_category_missing() {
        let f = fixture();
        let room = draft(CategoryId::new(), vec![]);

        let result = f.svc.create_room(room).await;
        assert!(matches!(
            result,
            Err(StayHubError::Request(RequestError::CategoryNotFound))
        ));
        assert!(f.svc.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_category_kind_is_experiences() {
        let f = fixture();
        let room = draft(f.experiences_category.id, vec![]);

        let result = f.svc.create_room(room).await;
        assert!(matches!(
            result,
            Err(StayHubError::Request(RequestError::CategoryKindMismatch))
        ));
        assert!(f.svc.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_amenity_missing_and_persist_nothing() {
        let f = fixture();
        let missing = AmenityId::new();
        let room = draft(f.rooms_category.id, vec![f.wifi.id, missing]);

        let result = f.svc.create_room(room).await;
        assert!(matches!(
            result,
            Err(StayHubError::Request(RequestError::AmenityNotFound(_)))
        ));
        assert!(f.svc.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_price_is_zero() {
        let f = fixture();
        let mut room = draft(f.rooms_category.id, vec![]);
        room.price = 0;

        let result = f.svc.create_room(room).await;
        assert!(matches!(
            result,
            Err(StayHubError::Validation(ValidationError::ZeroPrice))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_room_missing() {
        let f = fixture();
        let result = f.svc.get_room(RoomId::new()).await;
        assert!(matches!(result, Err(StayHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_merge_partial_update_without_touching_owner() {
        let f = fixture();
        let room = draft(f.rooms_category.id, vec![]);
        let id = room.id;
        let owner = room.owner_id;
        f.svc.create_room(room).await.unwrap();

        let patch = RoomPatch {
            price: Some(150),
            name: Some("Seaside flat deluxe".to_string()),
            ..RoomPatch::default()
        };
        let detail = f.svc.update_room(id, patch).await.unwrap();

        assert_eq!(detail.owner_id, owner);
        assert_eq!(detail.price, 150);
        assert_eq!(detail.name, "Seaside flat deluxe");
        assert_eq!(detail.city, "Lisbon");
    }

    #[tokio::test]
    async fn should_reject_update_with_missing_amenity_and_leave_room_unchanged() {
        let f = fixture();
        let room = draft(f.rooms_category.id, vec![f.wifi.id]);
        let id = room.id;
        f.svc.create_room(room).await.unwrap();

        let patch = RoomPatch {
            amenity_ids: Some(vec![AmenityId::new()]),
            ..RoomPatch::default()
        };
        let result = f.svc.update_room(id, patch).await;
        assert!(matches!(
            result,
            Err(StayHubError::Request(RequestError::AmenityNotFound(_)))
        ));

        let stored = f.svc.get_room(id).await.unwrap();
        assert_eq!(stored.amenity_ids, vec![f.wifi.id]);
    }

    #[tokio::test]
    async fn should_reject_update_to_experiences_category() {
        let f = fixture();
        let room = draft(f.rooms_category.id, vec![]);
        let id = room.id;
        f.svc.create_room(room).await.unwrap();

        let patch = RoomPatch {
            category_id: Some(f.experiences_category.id),
            ..RoomPatch::default()
        };
        let result = f.svc.update_room(id, patch).await;
        assert!(matches!(
            result,
            Err(StayHubError::Request(RequestError::CategoryKindMismatch))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_room() {
        let f = fixture();
        let result = f.svc.update_room(RoomId::new(), RoomPatch::default()).await;
        assert!(matches!(result, Err(StayHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_room_and_make_reads_fail() {
        let f = fixture();
        let room = draft(f.rooms_category.id, vec![]);
        let id = room.id;
        f.svc.create_room(room).await.unwrap();

        f.svc.delete_room(id).await.unwrap();

        let result = f.svc.room_detail(id).await;
        assert!(matches!(result, Err(StayHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_room() {
        let f = fixture();
        let result = f.svc.delete_room(RoomId::new()).await;
        assert!(matches!(result, Err(StayHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_rooms() {
        let f = fixture();
        f.svc
            .create_room(draft(f.rooms_category.id, vec![]))
            .await
            .unwrap();
        f.svc
            .create_room(draft(f.rooms_category.id, vec![f.wifi.id]))
            .await
            .unwrap();

        let all = f.svc.list_rooms().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
