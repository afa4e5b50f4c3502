//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stayhub_domain::error::StayHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`StayHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(StayHubError);

impl From<StayHubError> for ApiError {
    fn from(err: StayHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StayHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StayHubError::Request(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StayHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StayHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
