pub mod in_memory;

use crate::shared::core::entity::Entity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate entity: {id}")]
    Duplicate { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage port for one entity collection.
///
/// A missing id is never an error: lookups, updates and removals report it as `Ok(None)`.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every entity, in insertion order.
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    async fn get(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// Appends the entity. Fails with [`RepositoryError::Duplicate`] when its id is taken.
    async fn insert(&self, entity: T) -> Result<(), RepositoryError>;

    async fn update(&self, id: &str, changes: T::Changes) -> Result<Option<T>, RepositoryError>;

    async fn remove(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// Empties the collection and hands back what it held.
    async fn clear(&self) -> Result<Vec<T>, RepositoryError>;
}
