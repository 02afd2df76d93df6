use crate::modules::planner::core::errors::ApplicationError;
use crate::modules::planner::core::notifications::Notification;
use crate::modules::planner::core::participant::{Participant, ParticipantChanges};
use crate::modules::planner::store::PlannerStore;
use tracing::info;

impl PlannerStore {
    pub async fn participants(&self) -> Result<Vec<Participant>, ApplicationError> {
        Ok(self.participants.list().await?)
    }

    pub async fn participant(&self, id: &str) -> Result<Option<Participant>, ApplicationError> {
        Ok(self.participants.get(id).await?)
    }

    pub async fn participants_of_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<Participant>, ApplicationError> {
        let mut participants = self.participants.list().await?;
        participants.retain(|p| p.event_id.as_deref() == Some(event_id));
        Ok(participants)
    }

    /// The event id is stored as given, it is not checked against the events.
    pub async fn add_participant(
        &self,
        username: impl Into<String>,
        event_id: Option<String>,
    ) -> Result<Participant, ApplicationError> {
        let participant = Participant {
            id: self.next_id(),
            username: username.into(),
            event_id,
        };
        self.participants.insert(participant.clone()).await?;
        info!(participant_id = %participant.id, "participant added");
        self.notify(Notification::ParticipantAdded(participant.clone()));
        Ok(participant)
    }

    pub async fn update_participant(
        &self,
        id: &str,
        changes: ParticipantChanges,
    ) -> Result<Option<Participant>, ApplicationError> {
        let updated = self.participants.update(id, changes).await?;
        if updated.is_some() {
            info!(participant_id = %id, "participant updated");
        }
        Ok(updated)
    }

    pub async fn delete_participant(
        &self,
        id: &str,
    ) -> Result<Option<Participant>, ApplicationError> {
        let Some(participant) = self.participants.remove(id).await? else {
            return Ok(None);
        };
        info!(participant_id = %id, "participant deleted");
        self.notify(Notification::ParticipantDeleted(participant.clone()));
        Ok(Some(participant))
    }

    pub async fn delete_all_participants(&self) -> Result<Vec<Participant>, ApplicationError> {
        let deleted = self.participants.clear().await?;
        info!(count = deleted.len(), "all participants deleted");
        Ok(deleted)
    }
}
