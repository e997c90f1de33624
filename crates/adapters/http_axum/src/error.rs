//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use doorsim_domain::error::DoorSimError;

/// Fixed message for rejected set-status payloads. Part of the wire contract.
pub(crate) const INVALID_STATUS_MESSAGE: &str =
    r#"Invalid status provided. Send { "isOpen": boolean }"#;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

/// Maps [`DoorSimError`] to an HTTP response with appropriate status code.
pub struct ApiError(DoorSimError);

impl From<DoorSimError> for ApiError {
    fn from(err: DoorSimError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DoorSimError::Validation(err) => {
                tracing::debug!(error = %err, "rejecting request");
                (StatusCode::BAD_REQUEST, INVALID_STATUS_MESSAGE.to_string())
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
