//! Amenity — a named feature tag attachable to rooms.

use serde::{Deserialize, Serialize};

use crate::error::{StayHubError, ValidationError};
use crate::id::AmenityId;
use crate::time::{Timestamp, now};

/// A re-usable feature tag (wifi, parking, …) referenced by rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Amenity {
    /// Create a builder for constructing an [`Amenity`].
    #[must_use]
    pub fn builder() -> AmenityBuilder {
        AmenityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), StayHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Merge the provided fields of `patch` into this amenity and bump
    /// `updated_at`. Absent fields are left unchanged.
    pub fn apply(&mut self, patch: AmenityPatch, ts: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        self.updated_at = ts;
    }
}

/// Partial update for an [`Amenity`]. Absent fields are left unchanged.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AmenityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Step-by-step builder for [`Amenity`].
#[derive(Debug, Default)]
pub struct AmenityBuilder {
    id: Option<AmenityId>,
    name: Option<String>,
    description: Option<String>,
}

impl AmenityBuilder {
    #[must_use]
    pub fn id(mut self, id: AmenityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return an [`Amenity`].
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Amenity, StayHubError> {
        let ts = now();
        let amenity = Amenity {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            created_at: ts,
            updated_at: ts,
        };
        amenity.validate()?;
        Ok(amenity)
    }
}
