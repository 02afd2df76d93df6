use crate::modules::planner::core::notifications::{EventBus, Notification, Subscription, Topic};
use std::collections::HashMap;
use tokio::sync::broadcast;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 64;
/// Upper bound for `with_capacity`; every topic allocates its buffer up front.
pub const MAX_CAPACITY: usize = 65_536;

/// One broadcast channel per topic, created up front and dropped with the bus.
pub struct InMemoryEventBus {
    channels: HashMap<Topic, broadcast::Sender<Notification>>,
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// `capacity` must lie in `1..=MAX_CAPACITY`; `AppConfig` rejects anything else.
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();
        Self { channels }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Notification> {
        &self.channels[&topic]
    }
}

impl EventBus for InMemoryEventBus {
    fn publish(&self, notification: Notification) -> usize {
        let topic = notification.topic();
        // No receivers is not a failure.
        let delivered = self.sender(topic).send(notification).unwrap_or(0);
        debug!(%topic, delivered, "notification published");
        delivered
    }

    fn subscribe(&self, topic: Topic) -> Subscription {
        debug!(%topic, "subscriber registered");
        Subscription::new(topic, self.sender(topic).subscribe())
    }

    fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}
