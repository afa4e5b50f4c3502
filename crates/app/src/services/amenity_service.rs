//! Amenity service — use-cases for managing amenities.

use stayhub_domain::amenity::{Amenity, AmenityPatch};
use stayhub_domain::error::{NotFoundError, StayHubError};
use stayhub_domain::id::AmenityId;
use stayhub_domain::time::now;

use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new amenity after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_amenity(&self, amenity: Amenity) -> Result<Amenity, StayHubError> {
        amenity.validate()?;
        self.repo.create(amenity).await
    }

    /// Look up an amenity by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] when no amenity with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, StayHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Amenity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all amenities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, StayHubError> {
        self.repo.get_all().await
    }

    /// Partially update an existing amenity: provided fields are merged
    /// into the stored record, absent fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] if the amenity does not exist,
    /// [`StayHubError::Validation`] if the merged record is invalid, or a
    /// storage error from the repository.
    pub async fn update_amenity(
        &self,
        id: AmenityId,
        patch: AmenityPatch,
    ) -> Result<Amenity, StayHubError> {
        let mut amenity = self.get_amenity(id).await?;
        amenity.apply(patch, now());
        amenity.validate()?;
        self.repo.update(amenity).await
    }

    /// Delete an amenity by id.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::NotFound`] if the amenity does not exist,
    /// or a storage error propagated from the repository.
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), StayHubError> {
        self.get_amenity(id).await?;
        self.repo.delete(id).await
    }
}
