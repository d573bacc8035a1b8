use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::reading_list::{ListCategory, ReadingList};

/// Repository trait for ReadingList aggregate
#[async_trait]
pub trait ReadingListRepository: Send + Sync {
    /// Find the reading list of a user, if one was ever created
    async fn find_by_user(&self, user_id: Uuid) -> RepositoryResult<Option<ReadingList>>;

    /// Return the user's reading list, creating an empty one first if needed
    ///
    /// Fails with `RepositoryError::UnknownUser` when no such user exists.
    async fn get_or_create(&self, user_id: Uuid) -> RepositoryResult<ReadingList>;

    /// Persist only the given categories of the list
    ///
    /// Columns not named in `fields` keep whatever value is stored.
    async fn save_fields(&self, list: &ReadingList, fields: &[ListCategory]) -> RepositoryResult<()>;
}
