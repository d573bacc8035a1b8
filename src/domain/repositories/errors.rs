use thiserror::Error;

/// Errors returned by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint was violated
    #[error("Duplicate value for {0}")]
    Duplicate(String),

    /// The referenced user row does not exist
    #[error("Unknown user: {0}")]
    UnknownUser(uuid::Uuid),

    /// Stored data failed domain validation on the way out
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
