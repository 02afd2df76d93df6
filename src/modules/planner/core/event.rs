use crate::shared::core::entity::Entity;
use serde::{Deserialize, Serialize};

/// A planned event. The owner and the venue are stored as foreign ids only and are
/// looked up again on every read, so they may dangle once the user or location is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub user_id: String,
    pub location_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    pub user_id: Option<String>,
    pub location_id: Option<String>,
}

impl Entity for Event {
    type Changes = EventChanges;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, changes: EventChanges) {
        let EventChanges {
            title,
            description,
            time,
            user_id,
            location_id,
        } = changes;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(time) = time {
            self.time = time;
        }
        if let Some(user_id) = user_id {
            self.user_id = user_id;
        }
        if let Some(location_id) = location_id {
            self.location_id = location_id;
        }
    }
}
