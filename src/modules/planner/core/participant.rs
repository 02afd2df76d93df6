use crate::shared::core::entity::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub username: String,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ParticipantChanges {
    pub username: Option<String>,
    pub event_id: Option<String>,
}

impl Entity for Participant {
    type Changes = ParticipantChanges;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, changes: ParticipantChanges) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(event_id) = changes.event_id {
            self.event_id = Some(event_id);
        }
    }
}
