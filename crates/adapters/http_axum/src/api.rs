//! JSON handlers for the door-status API.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use doorsim_app::ports::EventPublisher;
use doorsim_domain::door::DoorStatus;
use doorsim_domain::error::{DoorSimError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful set-status call.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The door state after the call.
    pub is_open: bool,
}

/// `GET /status`
pub async fn status<P>(State(state): State<AppState<P>>) -> Json<DoorStatus>
where
    P: EventPublisher + Send + Sync + 'static,
{
    Json(state.door_service.status())
}

/// `POST /set-status`
///
/// The body is read as loose JSON and the `isOpen` field checked by hand:
/// a missing field, a non-boolean value, and an unparseable body all map to
/// the same 400 contract body, and the door state stays untouched.
pub async fn set_status<P>(
    State(state): State<AppState<P>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SetStatusResponse>, ApiError>
where
    P: EventPublisher + Send + Sync + 'static,
{
    let requested = payload
        .ok()
        .and_then(|Json(body)| body.get("isOpen").and_then(serde_json::Value::as_bool));
    let Some(requested_open) = requested else {
        return Err(ApiError::from(DoorSimError::Validation(
            ValidationError::InvalidStatus,
        )));
    };

    let status = state.door_service.set_status(requested_open).await?;
    Ok(Json(SetStatusResponse {
        success: true,
        is_open: status.is_open,
    }))
}
