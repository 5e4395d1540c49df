//! Domain events emitted by fridge operations.
//!
//! Events are published on the in-process bus and consumed by the
//! notification dispatcher and any other subscriber.

pub mod alert;
pub mod fridge;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use alert::AlertEvent;
pub use fridge::FridgeEvent;

use crate::types::id::{EventId, UserId};

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: EventId,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<UserId>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// An inventory lifecycle event.
    Fridge(FridgeEvent),
    /// A derived alert signal for the notification dispatcher.
    Alert(AlertEvent),
}

impl DomainEvent {
    /// Create a new domain event stamped at `timestamp`.
    pub fn new(actor_id: Option<UserId>, timestamp: DateTime<Utc>, payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp,
            actor_id,
            payload,
        }
    }

    /// Create a fridge lifecycle event.
    pub fn fridge(actor_id: UserId, timestamp: DateTime<Utc>, event: FridgeEvent) -> Self {
        Self::new(Some(actor_id), timestamp, EventPayload::Fridge(event))
    }

    /// Create an alert signal for `user_id`.
    pub fn alert(user_id: UserId, timestamp: DateTime<Utc>, event: AlertEvent) -> Self {
        Self::new(Some(user_id), timestamp, EventPayload::Alert(event))
    }
}
