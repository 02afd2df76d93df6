use crate::modules::planner::adapters::outbound::event_bus_in_memory::InMemoryEventBus;
use crate::modules::planner::store::PlannerStore;
use crate::shared::infrastructure::id_generator::IdGenerator;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlannerStore>,
}

impl AppState {
    pub fn new(store: Arc<PlannerStore>) -> Self {
        Self { store }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::from(config.id_strategy.build());
        let bus = Arc::new(InMemoryEventBus::with_capacity(
            config.notification_capacity,
        ));
        Self::new(Arc::new(PlannerStore::new(ids, bus)))
    }
}
