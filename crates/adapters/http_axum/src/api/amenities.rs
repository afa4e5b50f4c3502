//! JSON REST handlers for amenities.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use stayhub_app::ports::{AmenityRepository, CategoryRepository, RoomRepository};
use stayhub_domain::amenity::{Amenity, AmenityPatch};
use stayhub_domain::error::{NotFoundError, StayHubError};
use stayhub_domain::id::AmenityId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an amenity.
#[derive(Deserialize)]
pub struct CreateAmenityRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Amenity>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create, and update endpoints.
pub enum GetResponse {
    Ok(Json<Amenity>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// An id that does not parse as a UUID cannot name an existing amenity.
fn parse_id(id: &str) -> Result<AmenityId, ApiError> {
    AmenityId::from_str(id).map_err(|_| {
        ApiError::from(StayHubError::NotFound(NotFoundError {
            entity: "Amenity",
            id: id.to_string(),
        }))
    })
}

/// `GET /api/amenities`
pub async fn list<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
) -> Result<ListResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let amenities = state.amenity_service.list_amenities().await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `POST /api/amenities`
pub async fn create<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Json(req): Json<CreateAmenityRequest>,
) -> Result<GetResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let mut builder = Amenity::builder().name(req.name);
    if let Some(description) = req.description {
        builder = builder.description(description);
    }

    let amenity = builder.build()?;
    let created = state.amenity_service.create_amenity(amenity).await?;
    Ok(GetResponse::Ok(Json(created)))
}

/// `GET /api/amenities/:id`
pub async fn get<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let amenity_id = parse_id(&id)?;
    let amenity = state.amenity_service.get_amenity(amenity_id).await?;
    Ok(GetResponse::Ok(Json(amenity)))
}

/// `PUT /api/amenities/:id` — partial update.
pub async fn update<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Path(id): Path<String>,
    Json(patch): Json<AmenityPatch>,
) -> Result<GetResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let amenity_id = parse_id(&id)?;
    let updated = state
        .amenity_service
        .update_amenity(amenity_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/amenities/:id`
pub async fn delete<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let amenity_id = parse_id(&id)?;
    state.amenity_service.delete_amenity(amenity_id).await?;
    Ok(DeleteResponse::NoContent)
}
