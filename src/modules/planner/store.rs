// The in-memory entity store.
//
// Owns the four collections and is their only mutator. Ids come from the injected
// generator and notifications go out on the injected bus once a write has landed.
// The operations themselves live next to their use cases (`use_cases/*/handler.rs`).

use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::notifications::{EventBus, Notification, Subscription, Topic};
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;
use crate::shared::infrastructure::id_generator::IdGenerator;
use crate::shared::infrastructure::repository::Repository;
use crate::shared::infrastructure::repository::in_memory::InMemoryRepository;
use std::sync::Arc;

pub struct Repositories {
    pub users: Arc<dyn Repository<User>>,
    pub locations: Arc<dyn Repository<Location>>,
    pub events: Arc<dyn Repository<Event>>,
    pub participants: Arc<dyn Repository<Participant>>,
}

impl Default for Repositories {
    fn default() -> Self {
        Self {
            users: Arc::new(InMemoryRepository::<User>::new()),
            locations: Arc::new(InMemoryRepository::<Location>::new()),
            events: Arc::new(InMemoryRepository::<Event>::new()),
            participants: Arc::new(InMemoryRepository::<Participant>::new()),
        }
    }
}

pub struct PlannerStore {
    pub(crate) users: Arc<dyn Repository<User>>,
    pub(crate) locations: Arc<dyn Repository<Location>>,
    pub(crate) events: Arc<dyn Repository<Event>>,
    pub(crate) participants: Arc<dyn Repository<Participant>>,
    ids: Arc<dyn IdGenerator>,
    bus: Arc<dyn EventBus>,
}

impl PlannerStore {
    pub fn new(ids: Arc<dyn IdGenerator>, bus: Arc<dyn EventBus>) -> Self {
        Self::with_repositories(Repositories::default(), ids, bus)
    }

    pub fn with_repositories(
        repositories: Repositories,
        ids: Arc<dyn IdGenerator>,
        bus: Arc<dyn EventBus>,
    ) -> Self {
        let Repositories {
            users,
            locations,
            events,
            participants,
        } = repositories;
        Self {
            users,
            locations,
            events,
            participants,
            ids,
            bus,
        }
    }

    pub fn subscribe(&self, topic: Topic) -> Subscription {
        self.bus.subscribe(topic)
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.bus.subscriber_count(topic)
    }

    pub(crate) fn next_id(&self) -> String {
        self.ids.next_id()
    }

    pub(crate) fn notify(&self, notification: Notification) {
        self.bus.publish(notification);
    }
}
