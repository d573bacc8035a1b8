use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ReadingListError;
use super::value_objects::ListCategory;

/// A single mutation request against a reading list
///
/// Either field may be omitted. When both are present the add is applied
/// first, so moving a book between shelves is one action with
/// `field_add` set to the new shelf and `field_remove` to the old one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListAction {
    pub item_id: String,
    #[serde(default)]
    pub field_add: Option<ListCategory>,
    #[serde(default)]
    pub field_remove: Option<ListCategory>,
}

/// Reading list aggregate root
///
/// Holds the ordered book ids of each category for one user. A user has at
/// most one reading list; it is created lazily on the first mutation.
///
/// # Example
/// ```
/// use bookshelf_api::domain::reading_list::{ListAction, ListCategory, ReadingList};
/// use uuid::Uuid;
///
/// let mut list = ReadingList::empty(Uuid::new_v4());
/// let changed = list
///     .apply(&ListAction {
///         item_id: "OL7353617M".to_string(),
///         field_add: Some(ListCategory::Unread),
///         field_remove: None,
///     })
///     .expect("valid action");
///
/// assert_eq!(changed, vec![ListCategory::Unread]);
/// assert_eq!(list.category_of("OL7353617M"), Some(ListCategory::Unread));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingList {
    user_id: Uuid,
    read: Vec<String>,
    unread: Vec<String>,
    purchased: Vec<String>,
    dropped: Vec<String>,
}

impl ReadingList {
    /// Creates an empty reading list for a user
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            read: Vec::new(),
            unread: Vec::new(),
            purchased: Vec::new(),
            dropped: Vec::new(),
        }
    }

    /// Reconstructs a ReadingList from stored columns
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        user_id: Uuid,
        read: Vec<String>,
        unread: Vec<String>,
        purchased: Vec<String>,
        dropped: Vec<String>,
    ) -> Self {
        Self {
            user_id,
            read,
            unread,
            purchased,
            dropped,
        }
    }

    /// Applies an add and/or remove for one book
    ///
    /// # Returns
    /// * `Ok(Vec<ListCategory>)` - The categories that changed and must be saved,
    ///   without duplicates, in the order they were touched
    /// * `Err(ReadingListError)` - The list is left exactly as it was
    ///
    /// # Business Rules
    /// - Add runs before remove
    /// - Add appends to the end of the category
    /// - Remove deletes the first occurrence and fails if there is none
    pub fn apply(&mut self, action: &ListAction) -> Result<Vec<ListCategory>, ReadingListError> {
        let item_id = action.item_id.trim();
        if item_id.is_empty() {
            return Err(ReadingListError::EmptyItemId);
        }

        // Validate the removal up front so a failure never leaves a half-applied add
        if let Some(category) = action.field_remove {
            let added_here = action.field_add == Some(category);
            if !added_here && !self.contains(category, item_id) {
                return Err(ReadingListError::NotInList {
                    item_id: item_id.to_string(),
                    category,
                });
            }
        }

        let mut changed = Vec::with_capacity(2);

        if let Some(category) = action.field_add {
            self.books_mut(category).push(item_id.to_string());
            changed.push(category);
        }

        if let Some(category) = action.field_remove {
            let books = self.books_mut(category);
            if let Some(pos) = books.iter().position(|id| id == item_id) {
                books.remove(pos);
            }
            if !changed.contains(&category) {
                changed.push(category);
            }
        }

        Ok(changed)
    }

    /// Returns the book ids stored in a category
    pub fn books(&self, category: ListCategory) -> &[String] {
        match category {
            ListCategory::Read => &self.read,
            ListCategory::Unread => &self.unread,
            ListCategory::Purchased => &self.purchased,
            ListCategory::Dropped => &self.dropped,
        }
    }

    fn books_mut(&mut self, category: ListCategory) -> &mut Vec<String> {
        match category {
            ListCategory::Read => &mut self.read,
            ListCategory::Unread => &mut self.unread,
            ListCategory::Purchased => &mut self.purchased,
            ListCategory::Dropped => &mut self.dropped,
        }
    }

    /// Checks whether a book is in the given category
    pub fn contains(&self, category: ListCategory, item_id: &str) -> bool {
        self.books(category).iter().any(|id| id == item_id)
    }

    /// Returns the first category holding the book, if any
    pub fn category_of(&self, item_id: &str) -> Option<ListCategory> {
        ListCategory::ALL
            .into_iter()
            .find(|category| self.contains(*category, item_id))
    }

    /// Returns the owning user's ID
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Total number of entries across every category
    pub fn len(&self) -> usize {
        ListCategory::ALL
            .iter()
            .map(|category| self.books(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serializable view of every category, as returned by `/books/mybooks`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BooksView {
    pub read: Vec<String>,
    pub unread: Vec<String>,
    pub purchased: Vec<String>,
    pub dropped: Vec<String>,
}

impl From<&ReadingList> for BooksView {
    fn from(list: &ReadingList) -> Self {
        Self {
            read: list.read.clone(),
            unread: list.unread.clone(),
            purchased: list.purchased.clone(),
            dropped: list.dropped.clone(),
        }
    }
}
