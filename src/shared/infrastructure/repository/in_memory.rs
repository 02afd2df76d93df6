use crate::shared::core::entity::Entity;
use crate::shared::infrastructure::repository::{Repository, RepositoryError};
use tokio::sync::RwLock;

pub struct InMemoryRepository<T: Entity> {
    rows: RwLock<Vec<T>>,
    is_offline: bool,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            is_offline: false,
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|r| r.id() == entity.id()) {
            return Err(RepositoryError::Duplicate {
                id: entity.id().to_string(),
            });
        }
        guard.push(entity);
        Ok(())
    }

    async fn update(&self, id: &str, changes: T::Changes) -> Result<Option<T>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        Ok(guard.iter_mut().find(|r| r.id() == id).map(|row| {
            row.apply(changes);
            row.clone()
        }))
    }

    async fn remove(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(index) = guard.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        Ok(Some(guard.remove(index)))
    }

    async fn clear(&self) -> Result<Vec<T>, RepositoryError> {
        self.ensure_online()?;
        Ok(std::mem::take(&mut *self.rows.write().await))
    }
}
