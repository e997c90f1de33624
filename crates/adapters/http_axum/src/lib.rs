//! # doorsim-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the door-status JSON API (`GET /status`, `POST /set-status`)
//! - Serve the static fallback document for every other path (the bundled
//!   client application)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `doorsim-app` (for port traits and services) and
//! `doorsim-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
