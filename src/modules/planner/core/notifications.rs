// Notifications published by the store after a mutation has been applied.
//
// Each notification belongs to exactly one named topic. Subscribers only see what is
// published after they subscribed. Order is kept within a topic, never across topics.

use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;
use futures::Stream;
use std::fmt;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    UserCreated,
    UserDeleted,
    EventCreated,
    EventDeleted,
    ParticipantAdded,
    ParticipantDeleted,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::UserCreated,
        Topic::UserDeleted,
        Topic::EventCreated,
        Topic::EventDeleted,
        Topic::ParticipantAdded,
        Topic::ParticipantDeleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::UserCreated => "USER_CREATED",
            Topic::UserDeleted => "USER_DELETED",
            Topic::EventCreated => "EVENT_CREATED",
            Topic::EventDeleted => "EVENT_DELETED",
            Topic::ParticipantAdded => "PARTICIPANT_ADDED",
            Topic::ParticipantDeleted => "PARTICIPANT_DELETED",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    UserCreated(User),
    UserDeleted(User),
    EventCreated(Event),
    EventDeleted(Event),
    ParticipantAdded(Participant),
    ParticipantDeleted(Participant),
}

impl Notification {
    pub fn topic(&self) -> Topic {
        match self {
            Notification::UserCreated(_) => Topic::UserCreated,
            Notification::UserDeleted(_) => Topic::UserDeleted,
            Notification::EventCreated(_) => Topic::EventCreated,
            Notification::EventDeleted(_) => Topic::EventDeleted,
            Notification::ParticipantAdded(_) => Topic::ParticipantAdded,
            Notification::ParticipantDeleted(_) => Topic::ParticipantDeleted,
        }
    }
}

/// Publish/subscribe port the store talks to.
pub trait EventBus: Send + Sync {
    /// Fire-and-forget. Returns how many subscribers the notification reached.
    fn publish(&self, notification: Notification) -> usize;

    fn subscribe(&self, topic: Topic) -> Subscription;

    fn subscriber_count(&self, topic: Topic) -> usize;
}

/// A live registration on one topic. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    topic: Topic,
    receiver: broadcast::Receiver<Notification>,
}

impl Subscription {
    pub fn new(topic: Topic, receiver: broadcast::Receiver<Notification>) -> Self {
        Self { topic, receiver }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Waits for the next notification. `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<Notification> {
        loop {
            match self.receiver.recv().await {
                Ok(notification) => return Some(notification),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(topic = %self.topic, skipped, "subscriber lagged, skipping ahead");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Takes the next notification if one is already buffered.
    pub fn try_recv(&mut self) -> Option<Notification> {
        loop {
            match self.receiver.try_recv() {
                Ok(notification) => return Some(notification),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(topic = %self.topic, skipped, "subscriber lagged, skipping ahead");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = Notification> + Send + 'static {
        futures::stream::unfold(self, |mut subscription| async move {
            subscription
                .recv()
                .await
                .map(|notification| (notification, subscription))
        })
    }

    pub fn unsubscribe(self) {}
}
