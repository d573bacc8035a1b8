// Password hashing utilities
// Uses bcrypt; the salt is embedded in the hash string

use bcrypt::{hash, verify, DEFAULT_COST};

use super::errors::AuthError;
use crate::domain::user::Password;

/// Hashes a password using bcrypt
///
/// # Example
/// ```
/// use bookshelf_api::auth::password::hash_password;
/// use bookshelf_api::domain::user::Password;
///
/// let password = Password::new("my_password").unwrap();
/// let hash = hash_password(&password).expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &Password) -> Result<String, AuthError> {
    Ok(hash(password.as_str(), DEFAULT_COST)?)
}

/// Verifies a password against a bcrypt hash
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(AuthError)` - If the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    Ok(verify(password, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> Password {
        Password::new(raw).unwrap()
    }

    #[test]
    fn hash_and_verify_password() {
        let hash = hash_password(&password("shelf_pass_1")).expect("valid hash");
        assert!(verify_password("shelf_pass_1", &hash).expect("valid verification"));
    }

    #[test]
    fn verify_wrong_password() {
        let hash = hash_password(&password("shelf_pass_1")).expect("valid hash");
        assert!(!verify_password("wrong_password", &hash).expect("valid verification"));
    }

    #[test]
    fn hashes_are_salted() {
        let hash1 = hash_password(&password("same")).expect("valid hash");
        let hash2 = hash_password(&password("same")).expect("valid hash");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }
}
