//! Authenticated-requester extraction.
//!
//! Session handling lives upstream; by the time a request reaches this
//! service, the gateway has resolved the session into an `x-user-id`
//! header carrying the user's UUID. Requests without a valid header are
//! unauthenticated.

use std::str::FromStr;

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use stayhub_domain::id::UserId;

use crate::error::ErrorBody;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated requester.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: UserId,
}

/// Rejection returned when no valid user header is present.
#[derive(Debug)]
pub struct NotAuthenticated;

impl IntoResponse for NotAuthenticated {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "not authenticated".to_string(),
            }),
        )
            .into_response()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = NotAuthenticated;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(NotAuthenticated)?;
        let id = UserId::from_str(header).map_err(|_| NotAuthenticated)?;
        Ok(Self { id })
    }
}
