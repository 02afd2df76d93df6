use crate::modules::planner::core::errors::ApplicationError;
use crate::modules::planner::core::notifications::Notification;
use crate::modules::planner::core::user::{User, UserChanges};
use crate::modules::planner::store::PlannerStore;
use tracing::info;

impl PlannerStore {
    pub async fn users(&self) -> Result<Vec<User>, ApplicationError> {
        Ok(self.users.list().await?)
    }

    pub async fn user(&self, id: &str) -> Result<Option<User>, ApplicationError> {
        Ok(self.users.get(id).await?)
    }

    pub async fn add_user(&self, username: impl Into<String>) -> Result<User, ApplicationError> {
        let user = User {
            id: self.next_id(),
            username: username.into(),
        };
        self.users.insert(user.clone()).await?;
        info!(user_id = %user.id, "user added");
        self.notify(Notification::UserCreated(user.clone()));
        Ok(user)
    }

    pub async fn update_user(
        &self,
        id: &str,
        changes: UserChanges,
    ) -> Result<Option<User>, ApplicationError> {
        let updated = self.users.update(id, changes).await?;
        if updated.is_some() {
            info!(user_id = %id, "user updated");
        }
        Ok(updated)
    }

    pub async fn delete_user(&self, id: &str) -> Result<Option<User>, ApplicationError> {
        let Some(user) = self.users.remove(id).await? else {
            return Ok(None);
        };
        info!(user_id = %id, "user deleted");
        self.notify(Notification::UserDeleted(user.clone()));
        Ok(Some(user))
    }

    pub async fn delete_all_users(&self) -> Result<Vec<User>, ApplicationError> {
        let deleted = self.users.clear().await?;
        info!(count = deleted.len(), "all users deleted");
        Ok(deleted)
    }
}
