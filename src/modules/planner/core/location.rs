use crate::shared::core::entity::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct LocationChanges {
    pub name: Option<String>,
}

impl Entity for Location {
    type Changes = LocationChanges;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, changes: LocationChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
    }
}
