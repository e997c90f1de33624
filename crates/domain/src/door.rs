//! Door — the single state-holding concept in doorsim.
//!
//! A door is either closed, or open since some instant. An open door is
//! expected to be forced shut once a fixed window has elapsed; the countdown
//! itself lives in the application layer, the arithmetic lives here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// How long a door stays open before it is automatically closed.
pub const DEFAULT_OPEN_DURATION: Duration = Duration::from_secs(60);

/// The door state machine.
///
/// Fields are private so the invariant "`opened_at` is present iff the door
/// is open" cannot be broken from outside; the mutating methods maintain it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Door {
    is_open: bool,
    opened_at: Option<Timestamp>,
}

impl Door {
    /// A closed door.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the door is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The instant the door transitioned to open, if it is open.
    #[must_use]
    pub fn opened_at(&self) -> Option<Timestamp> {
        self.opened_at
    }

    /// Open the door at `at`. Re-opening an already open door refreshes
    /// `opened_at`, which restarts the countdown reported by [`status`](Self::status).
    pub fn open(&mut self, at: Timestamp) {
        self.is_open = true;
        self.opened_at = Some(at);
    }

    /// Close the door. Returns whether it was open; closing a closed door is
    /// a no-op.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        self.opened_at = None;
        was_open
    }

    /// Snapshot the door as seen at `now`, given the configured open window.
    ///
    /// While open, the remaining time is the window minus the elapsed time,
    /// rounded half-up to whole seconds and clamped at zero (the door may sit
    /// at zero briefly before the deferred close lands). While closed, the
    /// snapshot carries no remaining time at all.
    #[must_use]
    pub fn status(&self, now: Timestamp, open_duration: Duration) -> DoorStatus {
        match self.opened_at {
            Some(opened_at) if self.is_open => {
                let window_ms = i64::try_from(open_duration.as_millis()).unwrap_or(i64::MAX);
                let elapsed_ms = (now - opened_at).num_milliseconds();
                let remaining_ms = window_ms.saturating_sub(elapsed_ms);
                DoorStatus::open(round_to_seconds(remaining_ms))
            }
            _ => DoorStatus::closed(),
        }
    }
}

/// Round a millisecond count half-up to whole seconds, clamping at zero.
fn round_to_seconds(ms: i64) -> u64 {
    if ms <= 0 {
        0
    } else {
        u64::try_from((ms + 500) / 1000).unwrap_or(0)
    }
}

/// What a caller sees when querying the door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorStatus {
    /// Current logical state of the door.
    pub is_open: bool,
    /// Whole seconds left before the door auto-closes. Absent while closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_time: Option<u64>,
}

impl DoorStatus {
    /// Snapshot of a closed door.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            is_open: false,
            remaining_time: None,
        }
    }

    /// Snapshot of an open door with `remaining_time` seconds on the clock.
    #[must_use]
    pub fn open(remaining_time: u64) -> Self {
        Self {
            is_open: true,
            remaining_time: Some(remaining_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> Timestamp {
        chrono::Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn at_ms(ms: i64) -> Timestamp {
        chrono::Utc
            .timestamp_millis_opt(1_700_000_000_000 + ms)
            .unwrap()
    }

    #[test]
    fn should_start_closed_without_opened_at() {
        let door = Door::new();
        assert!(!door.is_open());
        assert!(door.opened_at().is_none());
    }

    #[test]
    fn should_record_opened_at_when_opened() {
        let mut door = Door::new();
        door.open(at(0));
        assert!(door.is_open());
        assert_eq!(door.opened_at(), Some(at(0)));
    }

    #[test]
    fn should_clear_opened_at_when_closed() {
        let mut door = Door::new();
        door.open(at(0));
        assert!(door.close());
        assert!(!door.is_open());
        assert!(door.opened_at().is_none());
    }

    #[test]
    fn should_report_noop_when_closing_closed_door() {
        let mut door = Door::new();
        assert!(!door.close());
        assert!(!door.close());
    }

    #[test]
    fn should_report_full_window_at_open_instant() {
        let mut door = Door::new();
        door.open(at(0));
        let status = door.status(at(0), DEFAULT_OPEN_DURATION);
        assert_eq!(status, DoorStatus::open(60));
    }

    #[test]
    fn should_count_down_as_time_elapses() {
        let mut door = Door::new();
        door.open(at(0));
        let status = door.status(at(10), DEFAULT_OPEN_DURATION);
        assert_eq!(status, DoorStatus::open(50));
    }

    #[test]
    fn should_round_remaining_time_half_up() {
        let mut door = Door::new();
        door.open(at_ms(0));
        // 9.5s elapsed → 50.5s left → 51
        let status = door.status(at_ms(9_500), DEFAULT_OPEN_DURATION);
        assert_eq!(status.remaining_time, Some(51));
        // 10.6s elapsed → 49.4s left → 49
        let status = door.status(at_ms(10_600), DEFAULT_OPEN_DURATION);
        assert_eq!(status.remaining_time, Some(49));
    }

    #[test]
    fn should_clamp_remaining_time_at_zero_when_window_elapsed() {
        let mut door = Door::new();
        door.open(at(0));
        let status = door.status(at(61), DEFAULT_OPEN_DURATION);
        assert_eq!(status, DoorStatus::open(0));
    }

    #[test]
    fn should_restart_countdown_when_reopened() {
        let mut door = Door::new();
        door.open(at(0));
        door.open(at(40));
        let status = door.status(at(70), DEFAULT_OPEN_DURATION);
        assert_eq!(status, DoorStatus::open(30));
    }

    #[test]
    fn should_honour_custom_open_duration() {
        let mut door = Door::new();
        door.open(at(0));
        let status = door.status(at(2), Duration::from_secs(5));
        assert_eq!(status, DoorStatus::open(3));
    }

    #[test]
    fn should_omit_remaining_time_when_closed() {
        let status = DoorStatus::closed();
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"isOpen":false}"#);
    }

    #[test]
    fn should_serialize_remaining_time_in_camel_case_when_open() {
        let status = DoorStatus::open(50);
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"isOpen":true,"remainingTime":50}"#);
    }

    #[test]
    fn should_deserialize_status_without_remaining_time() {
        let status: DoorStatus = serde_json::from_str(r#"{"isOpen":false}"#).unwrap();
        assert_eq!(status, DoorStatus::closed());
    }
}
