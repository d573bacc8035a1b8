// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_reading_list_repository;
pub mod postgres_user_repository;

pub use postgres_reading_list_repository::PostgresReadingListRepository;
pub use postgres_user_repository::PostgresUserRepository;
