//! # doorsim-domain
//!
//! Pure domain model for the doorsim door-status service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **Door** state machine (open/closed with an opened-at instant)
//! - Define **status snapshots** (what callers see, including remaining-open time)
//! - Define **Events** (transition records: opened, closed and why)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod door;
pub mod error;
pub mod event;
pub mod time;
