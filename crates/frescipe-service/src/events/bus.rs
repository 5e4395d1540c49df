//! Broadcast bus carrying domain events to in-process subscribers.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use frescipe_core::events::{DomainEvent, EventPayload};
use frescipe_core::traits::EventPublisher;

/// Fan-out of [`DomainEvent`]s over a tokio broadcast channel.
///
/// Events published while nobody is subscribed are dropped. A slow
/// subscriber that falls more than the buffer size behind loses the
/// oldest events.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `buffer_size` events per subscriber.
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size.max(1));
        Self { sender }
    }

    /// Subscribe to every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Spawn a subscriber that logs every event until the bus is dropped.
    ///
    /// Stands in for the notification dispatcher, which lives outside
    /// this process.
    pub fn spawn_logger(&self) -> JoinHandle<()> {
        let mut rx = self.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => log_event(&event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Event logger lagged behind the bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            debug!("Event logger stopped");
        })
    }
}

impl EventPublisher for EventBus {
    fn publish(&self, event: DomainEvent) {
        if self.sender.send(event).is_err() {
            debug!("Event dropped, no subscribers");
        }
    }
}

fn log_event(event: &DomainEvent) {
    let actor = event.actor_id.map(|id| id.to_string()).unwrap_or_default();
    match &event.payload {
        EventPayload::Fridge(payload) => {
            info!(event_id = %event.id, actor = %actor, event = ?payload, "Fridge event");
        }
        EventPayload::Alert(alert) => {
            info!(
                event_id = %event.id,
                actor = %actor,
                item_id = %alert.item_id(),
                alert = ?alert,
                "Alert signal"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use frescipe_core::events::FridgeEvent;
    use frescipe_core::types::{FridgeItemId, UserId};

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let item_id = FridgeItemId::new();

        bus.publish(DomainEvent::fridge(
            UserId::new(),
            Utc::now(),
            FridgeEvent::ItemOpened { item_id },
        ));

        let received = rx.recv().await.unwrap();
        match received.payload {
            EventPayload::Fridge(FridgeEvent::ItemOpened { item_id: got }) => {
                assert_eq!(got, item_id)
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new(4);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(DomainEvent::fridge(
            UserId::new(),
            Utc::now(),
            FridgeEvent::ItemRemoved {
                item_id: FridgeItemId::new(),
            },
        ));
    }
}
