//! # doorsim-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port traits** that adapters must implement:
//!   - `EventPublisher` — deliver door transition events
//! - Provide the driving use-case:
//!   - `DoorService` — query status, set status, manage the auto-close timer
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate the domain `Door` without knowing *how* transport or IO works
//!
//! ## Dependency rule
//! Depends on `doorsim-domain` only (plus `tokio` for tasks, timers and
//! channels). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
