use crate::shared::core::entity::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
}

impl Entity for User {
    type Changes = UserChanges;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, changes: UserChanges) {
        if let Some(username) = changes.username {
            self.username = username;
        }
    }
}
