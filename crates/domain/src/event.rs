//! Event — an immutable record of a door transition.
//!
//! Events are produced whenever the door actually changes state: an explicit
//! open, an explicit close, or the deferred auto-close landing. A close that
//! finds the door already closed produces nothing.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Why a door transitioned to closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// A caller asked for the door to close.
    Manual,
    /// The open window elapsed and the deferred close fired.
    AutoClose,
}

/// The transition that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DoorEventKind {
    /// The door transitioned to open (or re-opened, restarting the window).
    Opened,
    /// The door transitioned to closed.
    Closed {
        /// What drove the transition.
        reason: CloseReason,
    },
}

/// A timestamped door transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorEvent {
    /// The transition that occurred.
    pub kind: DoorEventKind,
    /// When it occurred.
    pub timestamp: Timestamp,
}

impl DoorEvent {
    /// An open transition at `timestamp`.
    #[must_use]
    pub fn opened(timestamp: Timestamp) -> Self {
        Self {
            kind: DoorEventKind::Opened,
            timestamp,
        }
    }

    /// A close transition at `timestamp` for the given reason.
    #[must_use]
    pub fn closed(reason: CloseReason, timestamp: Timestamp) -> Self {
        Self {
            kind: DoorEventKind::Closed { reason },
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_build_opened_event() {
        let ts = now();
        let event = DoorEvent::opened(ts);
        assert_eq!(event.kind, DoorEventKind::Opened);
        assert_eq!(event.timestamp, ts);
    }

    #[test]
    fn should_build_closed_event_with_reason() {
        let event = DoorEvent::closed(CloseReason::AutoClose, now());
        assert_eq!(
            event.kind,
            DoorEventKind::Closed {
                reason: CloseReason::AutoClose
            }
        );
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let event = DoorEvent::closed(CloseReason::Manual, now());
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"closed""#));
        assert!(json.contains(r#""reason":"manual""#));
        let parsed: DoorEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
