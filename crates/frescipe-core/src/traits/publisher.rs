//! Event publisher trait for handing domain events to subscribers.

use crate::events::DomainEvent;

/// Sink for domain events.
///
/// Publishing never fails the operation that produced the event; a
/// publisher with no subscribers simply drops it.
pub trait EventPublisher: Send + Sync + std::fmt::Debug + 'static {
    /// Publish a single event.
    fn publish(&self, event: DomainEvent);
}

/// Publisher that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: DomainEvent) {}
}
