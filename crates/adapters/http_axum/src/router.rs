//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use doorsim_app::ports::EventPublisher;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The two API routes live at the root, matching what the client polls.
/// Every unmatched path falls back to the static assets under `public_dir`,
/// with its `index.html` as the final fallback; a missing directory degrades
/// to 404. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<P>(state: AppState<P>, public_dir: impl AsRef<Path>) -> Router
where
    P: EventPublisher + Send + Sync + 'static,
{
    let public_dir = public_dir.as_ref();
    let assets = ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/status", get(crate::api::status::<P>))
        .route("/set-status", post(crate::api::set_status::<P>))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
