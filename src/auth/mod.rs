// Authentication helpers
// bcrypt password hashing, JWT session tokens, and the session cookie

pub mod errors;
pub mod jwt;
pub mod password;
pub mod session;

pub use errors::AuthError;
