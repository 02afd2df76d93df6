use crate::modules::planner::adapters::outbound::event_bus_in_memory::InMemoryEventBus;
use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;
use crate::modules::planner::store::{PlannerStore, Repositories};
use crate::shared::core::entity::Entity;
use crate::shared::infrastructure::id_generator::sequential::SequentialIdGenerator;
use crate::shared::infrastructure::repository::in_memory::InMemoryRepository;
use std::sync::Arc;

/// Store with deterministic ids: "1", "2", "3", ... across all collections.
pub fn make_store() -> PlannerStore {
    PlannerStore::new(
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(InMemoryEventBus::new()),
    )
}

fn offline<T: Entity>() -> Arc<InMemoryRepository<T>> {
    let mut repository = InMemoryRepository::<T>::new();
    repository.toggle_offline();
    Arc::new(repository)
}

/// Store whose every repository call fails with a backend error.
pub fn make_offline_store() -> PlannerStore {
    let repositories = Repositories {
        users: offline::<User>(),
        locations: offline::<Location>(),
        events: offline::<Event>(),
        participants: offline::<Participant>(),
    };
    PlannerStore::with_repositories(
        repositories,
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(InMemoryEventBus::new()),
    )
}
