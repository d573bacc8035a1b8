use thiserror::Error;

/// Errors from hashing passwords or handling session tokens
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Invalid token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
