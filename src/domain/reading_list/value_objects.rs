use serde::{Deserialize, Serialize};

/// One of the four shelves a book can sit on
///
/// Each category maps to its own column in `reading_lists`, so the
/// column name doubles as the wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListCategory {
    Read,
    Unread,
    Purchased,
    Dropped,
}

impl ListCategory {
    /// All categories in display order
    pub const ALL: [ListCategory; 4] = [
        ListCategory::Read,
        ListCategory::Unread,
        ListCategory::Purchased,
        ListCategory::Dropped,
    ];

    /// Column name backing this category
    pub fn column(&self) -> &'static str {
        match self {
            ListCategory::Read => "read",
            ListCategory::Unread => "unread",
            ListCategory::Purchased => "purchased",
            ListCategory::Dropped => "dropped",
        }
    }
}

impl std::fmt::Display for ListCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_column() {
        for category in ListCategory::ALL {
            assert_eq!(category.to_string(), category.column());
        }
    }

    #[test]
    fn all_lists_each_category_once() {
        for category in ListCategory::ALL {
            let occurrences = ListCategory::ALL.iter().filter(|c| **c == category).count();
            assert_eq!(occurrences, 1);
        }
    }

    #[test]
    fn serde_rejects_unknown_and_mixed_case() {
        assert!(serde_json::from_str::<ListCategory>("\"wishlist\"").is_err());
        assert!(serde_json::from_str::<ListCategory>("\"Read\"").is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&ListCategory::Unread).unwrap();
        assert_eq!(json, "\"unread\"");

        let parsed: ListCategory = serde_json::from_str("\"dropped\"").unwrap();
        assert_eq!(parsed, ListCategory::Dropped);
    }
}
