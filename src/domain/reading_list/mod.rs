// Reading list domain module
// Contains the reading list aggregate, its categories, and mutation errors

#![allow(clippy::module_inception)]

pub mod errors;
pub mod reading_list;
pub mod value_objects;

pub use errors::ReadingListError;
pub use reading_list::{BooksView, ListAction, ReadingList};
pub use value_objects::ListCategory;
