use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::user::{Email, Username};

/// User data for persistence
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub is_active: bool,
}

/// Repository trait for User aggregate
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// Fails with `RepositoryError::Duplicate` when the username is taken.
    async fn create(&self, user: User) -> RepositoryResult<Uuid>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;

    /// Update user's last login timestamp
    async fn update_last_login(&self, user_id: Uuid) -> RepositoryResult<()>;
}
