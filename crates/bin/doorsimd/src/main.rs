//! # doorsimd — doorsim daemon
//!
//! Composition root that wires the application together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the event bus and the door service
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tokio::sync::broadcast;

use doorsim_adapter_http_axum::router;
use doorsim_adapter_http_axum::state::AppState;
use doorsim_app::event_bus::InProcessEventBus;
use doorsim_app::services::door_service::DoorService;
use doorsim_domain::event::{DoorEvent, DoorEventKind};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Event bus; mirror every door transition into the log.
    let event_bus = InProcessEventBus::new(256);
    let events = event_bus.subscribe();
    tokio::spawn(log_events(events));

    // Service
    let door_service = DoorService::new(event_bus, config.door.open_duration());

    // HTTP
    let state = AppState::new(door_service);
    let app = router::build(state, &config.assets.public_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "doorsimd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    Ok(())
}

/// Drain the event bus into structured log lines for the process lifetime.
async fn log_events(mut events: broadcast::Receiver<DoorEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => match event.kind {
                DoorEventKind::Opened => {
                    tracing::info!(at = %event.timestamp, "door opened");
                }
                DoorEventKind::Closed { reason } => {
                    tracing::info!(at = %event.timestamp, ?reason, "door closed");
                }
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log fell behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
