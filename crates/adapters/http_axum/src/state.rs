//! Shared application state for axum handlers.

use std::sync::Arc;

use doorsim_app::ports::EventPublisher;
use doorsim_app::services::door_service::DoorService;

/// Application state shared across all axum handlers.
///
/// Generic over the event publisher to avoid dynamic dispatch. `Clone` is
/// implemented manually so the publisher itself does not need to be `Clone`
/// — only the `Arc` wrapper is cloned.
pub struct AppState<P> {
    /// Door status/command service.
    pub door_service: Arc<DoorService<P>>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            door_service: Arc::clone(&self.door_service),
        }
    }
}

impl<P> AppState<P>
where
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from the door service.
    pub fn new(door_service: DoorService<P>) -> Self {
        Self {
            door_service: Arc::new(door_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arc(door_service: Arc<DoorService<P>>) -> Self {
        Self { door_service }
    }
}
