//! JSON REST handlers for rooms.
//!
//! Creation requires an authenticated requester: the owner is bound
//! server-side from the [`AuthUser`] extractor, never from the payload.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use stayhub_app::ports::{AmenityRepository, CategoryRepository, RoomRepository};
use stayhub_domain::error::{NotFoundError, RequestError, StayHubError};
use stayhub_domain::id::{AmenityId, CategoryId, RoomId};
use stayhub_domain::room::{Room, RoomDetail, RoomKind, RoomPatch, RoomSummary};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room. The category and amenities are
/// referenced by id; the owner comes from the authenticated requester.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub amenities: Vec<AmenityId>,
    pub name: String,
    pub price: u32,
    pub country: Option<String>,
    pub city: Option<String>,
    pub rooms: Option<u32>,
    pub toilets: Option<u32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<RoomKind>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RoomSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create, and update endpoints.
pub enum DetailResponse {
    Ok(Json<RoomDetail>),
}

impl IntoResponse for DetailResponse {
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

/// An id that does not parse as a UUID cannot name an existing room.
fn parse_id(id: &str) -> Result<RoomId, ApiError> {
    RoomId::from_str(id).map_err(|_| {
        ApiError::from(StayHubError::NotFound(NotFoundError {
            entity: "Room",
            id: id.to_string(),
        }))
    })
}

/// `GET /api/rooms` — list projection.
pub async fn list<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
) -> Result<ListResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let rooms = state.room_service.list_rooms().await?;
    let summaries = rooms.iter().map(RoomSummary::from).collect();
    Ok(ListResponse::Ok(Json(summaries)))
}

/// `POST /api/rooms` — create a room owned by the authenticated requester.
pub async fn create<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    user: AuthUser,
    Json(req): Json<CreateRoomRequest>,
) -> Result<DetailResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let Some(category_id) = req.category else {
        return Err(StayHubError::from(RequestError::CategoryRequired).into());
    };

    let mut builder = Room::builder(user.id, category_id)
        .name(req.name)
        .price(req.price)
        .amenities(req.amenities);
    if let Some(country) = req.country {
        builder = builder.country(country);
    }
    if let Some(city) = req.city {
        builder = builder.city(city);
    }
    if let Some(rooms) = req.rooms {
        builder = builder.rooms(rooms);
    }
    if let Some(toilets) = req.toilets {
        builder = builder.toilets(toilets);
    }
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(address) = req.address {
        builder = builder.address(address);
    }
    if let Some(pet_friendly) = req.pet_friendly {
        builder = builder.pet_friendly(pet_friendly);
    }
    if let Some(kind) = req.kind {
        builder = builder.kind(kind);
    }

    let room = builder.build()?;
    let detail = state.room_service.create_room(room).await?;
    Ok(DetailResponse::Ok(Json(detail)))
}

/// `GET /api/rooms/:id` — detail projection.
pub async fn get<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Path(id): Path<String>,
) -> Result<DetailResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let room_id = parse_id(&id)?;
    let detail = state.room_service.room_detail(room_id).await?;
    Ok(DetailResponse::Ok(Json(detail)))
}

/// `PUT /api/rooms/:id` — partial update.
pub async fn update<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Path(id): Path<String>,
    Json(patch): Json<RoomPatch>,
) -> Result<DetailResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let room_id = parse_id(&id)?;
    let detail = state.room_service.update_room(room_id, patch).await?;
    Ok(DetailResponse::Ok(Json(detail)))
}

/// `DELETE /api/rooms/:id`
pub async fn delete<AR, CR, RR>(
    State(state): State<AppState<AR, CR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let room_id = parse_id(&id)?;
    state.room_service.delete_room(room_id).await?;
    Ok(DeleteResponse::NoContent)
}
