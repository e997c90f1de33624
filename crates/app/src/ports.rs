//! Port traits — the seams between the application core and the outside.

use std::future::Future;

use doorsim_domain::error::DoorSimError;
use doorsim_domain::event::DoorEvent;

/// Outbound port for delivering door transition events.
///
/// Implementations must tolerate having no interested consumers; publishing
/// into the void is not an error.
pub trait EventPublisher {
    /// Publish a single event.
    fn publish(&self, event: DoorEvent) -> impl Future<Output = Result<(), DoorSimError>> + Send;
}
