use thiserror::Error;

use super::value_objects::ListCategory;

/// Errors raised while mutating a reading list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingListError {
    #[error("Book id cannot be empty")]
    EmptyItemId,

    #[error("Book {item_id} is not in the {category} list")]
    NotInList {
        item_id: String,
        category: ListCategory,
    },
}
