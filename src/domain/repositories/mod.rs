// Repository interfaces (ports)
// Implemented by adapters in infrastructure::repositories

pub mod errors;
pub mod reading_list_repository;
pub mod user_repository;

pub use errors::RepositoryError;
pub use reading_list_repository::ReadingListRepository;
pub use user_repository::{User, UserRepository};
