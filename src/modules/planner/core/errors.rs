use crate::shared::infrastructure::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("location not found: {0}")]
    LocationNotFound(String),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
