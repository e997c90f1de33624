//! Door service — the single owner of the door state and its auto-close timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use doorsim_domain::door::{Door, DoorStatus};
use doorsim_domain::error::DoorSimError;
use doorsim_domain::event::{CloseReason, DoorEvent};
use doorsim_domain::time::now;

use crate::ports::EventPublisher;

/// Application service owning the one process-wide door.
///
/// Every mutation goes through [`set_status`](Self::set_status), which holds
/// the protocol together: cancel the pending auto-close, mutate the door,
/// schedule a fresh auto-close if the door is now open. At most one auto-close
/// task is alive at any time.
pub struct DoorService<P> {
    shared: Arc<Shared<P>>,
    open_duration: Duration,
}

/// State reachable from both the service and its spawned auto-close tasks.
struct Shared<P> {
    cell: Mutex<DoorCell>,
    publisher: P,
}

struct DoorCell {
    door: Door,
    auto_close: Option<JoinHandle<()>>,
    /// Bumped on every mutation. An auto-close task only closes the door if
    /// the generation it was scheduled under is still current — `abort` alone
    /// cannot stop a task that already finished sleeping and is waiting on
    /// the lock.
    generation: u64,
}

impl<P> Shared<P> {
    fn lock_cell(&self) -> MutexGuard<'_, DoorCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P> DoorService<P>
where
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new service with a closed door and the given open window.
    pub fn new(publisher: P, open_duration: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                cell: Mutex::new(DoorCell {
                    door: Door::new(),
                    auto_close: None,
                    generation: 0,
                }),
                publisher,
            }),
            open_duration,
        }
    }

    /// Snapshot the current door status. Pure read, always succeeds.
    #[must_use]
    pub fn status(&self) -> DoorStatus {
        let cell = self.shared.lock_cell();
        cell.door.status(now(), self.open_duration)
    }

    /// Open or close the door.
    ///
    /// Opening (re)starts the auto-close countdown from this call's
    /// timestamp; closing cancels it. Closing an already closed door is a
    /// no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event publisher.
    pub async fn set_status(&self, requested_open: bool) -> Result<DoorStatus, DoorSimError> {
        let (status, event) = if requested_open {
            self.open_door()
        } else {
            self.close_door()
        };
        if let Some(event) = event {
            self.shared.publisher.publish(event).await?;
        }
        Ok(status)
    }

    fn open_door(&self) -> (DoorStatus, Option<DoorEvent>) {
        let mut cell = self.shared.lock_cell();
        if let Some(pending) = cell.auto_close.take() {
            pending.abort();
        }
        cell.generation = cell.generation.wrapping_add(1);
        let opened_at = now();
        cell.door.open(opened_at);
        cell.auto_close = Some(self.spawn_auto_close(cell.generation));
        tracing::debug!(%opened_at, "door opened");
        (
            cell.door.status(opened_at, self.open_duration),
            Some(DoorEvent::opened(opened_at)),
        )
    }

    fn close_door(&self) -> (DoorStatus, Option<DoorEvent>) {
        let mut cell = self.shared.lock_cell();
        if let Some(pending) = cell.auto_close.take() {
            pending.abort();
        }
        cell.generation = cell.generation.wrapping_add(1);
        let was_open = cell.door.close();
        if was_open {
            tracing::debug!("door closed");
        }
        let event = was_open.then(|| DoorEvent::closed(CloseReason::Manual, now()));
        (cell.door.status(now(), self.open_duration), event)
    }

    fn spawn_auto_close(&self, generation: u64) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let open_duration = self.open_duration;
        tokio::spawn(async move {
            tokio::time::sleep(open_duration).await;
            let event = {
                let mut cell = shared.lock_cell();
                if cell.generation != generation || !cell.door.is_open() {
                    return;
                }
                cell.door.close();
                cell.auto_close = None;
                tracing::debug!("auto-close fired");
                DoorEvent::closed(CloseReason::AutoClose, now())
            };
            let _ = shared.publisher.publish(event).await;
        })
    }
}
