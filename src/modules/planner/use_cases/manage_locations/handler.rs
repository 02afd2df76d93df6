use crate::modules::planner::core::errors::ApplicationError;
use crate::modules::planner::core::location::{Location, LocationChanges};
use crate::modules::planner::store::PlannerStore;
use tracing::info;

impl PlannerStore {
    pub async fn locations(&self) -> Result<Vec<Location>, ApplicationError> {
        Ok(self.locations.list().await?)
    }

    pub async fn location(&self, id: &str) -> Result<Option<Location>, ApplicationError> {
        Ok(self.locations.get(id).await?)
    }

    pub async fn add_location(&self, name: impl Into<String>) -> Result<Location, ApplicationError> {
        let location = Location {
            id: self.next_id(),
            name: name.into(),
        };
        self.locations.insert(location.clone()).await?;
        info!(location_id = %location.id, "location added");
        Ok(location)
    }

    pub async fn update_location(
        &self,
        id: &str,
        changes: LocationChanges,
    ) -> Result<Option<Location>, ApplicationError> {
        let updated = self.locations.update(id, changes).await?;
        if updated.is_some() {
            info!(location_id = %id, "location updated");
        }
        Ok(updated)
    }

    /// Events pointing at the location are left alone.
    pub async fn delete_location(&self, id: &str) -> Result<Option<Location>, ApplicationError> {
        let deleted = self.locations.remove(id).await?;
        if deleted.is_some() {
            info!(location_id = %id, "location deleted");
        }
        Ok(deleted)
    }

    pub async fn delete_all_locations(&self) -> Result<Vec<Location>, ApplicationError> {
        let deleted = self.locations.clear().await?;
        info!(count = deleted.len(), "all locations deleted");
        Ok(deleted)
    }
}
