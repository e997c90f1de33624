//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]` — no bare
//! `String` variants.

/// Top-level error for the doorsim core.
#[derive(Debug, thiserror::Error)]
pub enum DoorSimError {
    /// A caller-supplied value failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Validation failures for caller-supplied input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The requested door status is missing or not a boolean.
    #[error("requested status is missing or not a boolean")]
    InvalidStatus,
}
