//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StayHubError`] via `#[from]`. Adapters wrap their infrastructure
//! errors into the `Storage` variant.

use thiserror::Error;

/// Top-level error returned by application services.
#[derive(Debug, Error)]
pub enum StayHubError {
    /// A field-level invariant failed.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The request is semantically invalid (bad references, wrong kind).
    #[error("bad request")]
    Request(#[from] RequestError),

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The `name` field is empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The `price` field is zero.
    #[error("price must be greater than zero")]
    ZeroPrice,
}

/// A lookup by id found nothing.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable record kind ("Amenity", "Room", …).
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}

/// Request-semantics failures raised while resolving references.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Room payload did not name a category.
    #[error("category is required")]
    CategoryRequired,

    /// The referenced category does not exist.
    #[error("category not found")]
    CategoryNotFound,

    /// The referenced category classifies experiences, not rooms.
    #[error("the category kind should be 'rooms'")]
    CategoryKindMismatch,

    /// A referenced amenity does not exist.
    #[error("amenity with id {0} not found")]
    AmenityNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Amenity",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Amenity abc not found");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: StayHubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            StayHubError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_convert_request_error_into_top_level_error() {
        let err: StayHubError = RequestError::CategoryKindMismatch.into();
        assert!(matches!(
            err,
            StayHubError::Request(RequestError::CategoryKindMismatch)
        ));
    }

    #[test]
    fn should_render_amenity_not_found_with_offending_id() {
        let err = RequestError::AmenityNotFound("abc".to_string());
        assert_eq!(err.to_string(), "amenity with id abc not found");
    }
}
