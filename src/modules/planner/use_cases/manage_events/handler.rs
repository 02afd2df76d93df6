use crate::modules::planner::core::errors::{ApplicationError, ValidationError};
use crate::modules::planner::core::event::{Event, EventChanges};
use crate::modules::planner::core::notifications::Notification;
use crate::modules::planner::store::PlannerStore;
use crate::modules::planner::use_cases::manage_events::command::AddEvent;
use tracing::{info, warn};

impl PlannerStore {
    pub async fn events(&self) -> Result<Vec<Event>, ApplicationError> {
        Ok(self.events.list().await?)
    }

    pub async fn event(&self, id: &str) -> Result<Option<Event>, ApplicationError> {
        Ok(self.events.get(id).await?)
    }

    pub async fn events_by_user(&self, user_id: &str) -> Result<Vec<Event>, ApplicationError> {
        let mut events = self.events.list().await?;
        events.retain(|e| e.user_id == user_id);
        Ok(events)
    }

    /// The only mutation that checks its foreign ids: both the owner and the venue
    /// must exist when the event is created.
    pub async fn add_event(&self, command: AddEvent) -> Result<Event, ApplicationError> {
        if self.users.get(&command.user_id).await?.is_none() {
            warn!(user_id = %command.user_id, "event rejected, unknown user");
            return Err(ValidationError::UserNotFound(command.user_id).into());
        }
        if self.locations.get(&command.location_id).await?.is_none() {
            warn!(location_id = %command.location_id, "event rejected, unknown location");
            return Err(ValidationError::LocationNotFound(command.location_id).into());
        }

        let AddEvent {
            title,
            user_id,
            location_id,
            description,
            time,
        } = command;
        let event = Event {
            id: self.next_id(),
            title,
            description,
            time,
            user_id,
            location_id,
        };
        self.events.insert(event.clone()).await?;
        info!(event_id = %event.id, "event added");
        self.notify(Notification::EventCreated(event.clone()));
        Ok(event)
    }

    pub async fn update_event(
        &self,
        id: &str,
        changes: EventChanges,
    ) -> Result<Option<Event>, ApplicationError> {
        let updated = self.events.update(id, changes).await?;
        if updated.is_some() {
            info!(event_id = %id, "event updated");
        }
        Ok(updated)
    }

    pub async fn delete_event(&self, id: &str) -> Result<Option<Event>, ApplicationError> {
        let Some(event) = self.events.remove(id).await? else {
            return Ok(None);
        };
        info!(event_id = %id, "event deleted");
        self.notify(Notification::EventDeleted(event.clone()));
        Ok(Some(event))
    }

    pub async fn delete_all_events(&self) -> Result<Vec<Event>, ApplicationError> {
        let deleted = self.events.clear().await?;
        info!(count = deleted.len(), "all events deleted");
        Ok(deleted)
    }
}
