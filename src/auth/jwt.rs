// JWT session tokens
// HS256, 8-hour expiry, user id in `sub`

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;

/// Session lifetime in hours
pub const TOKEN_TTL_HOURS: i64 = 8;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Username at the time of login
    pub username: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a session token for a user
///
/// # Example
/// ```
/// use bookshelf_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "alice", "secret").expect("valid token");
/// let claims = verify_token(&token, "secret").expect("valid claims");
/// assert_eq!(claims.sub, user_id);
/// assert_eq!(claims.username, "alice");
/// ```
pub fn create_token(user_id: Uuid, username: &str, secret: &str) -> Result<String, AuthError> {
    let expiry = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: expiry.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Verifies and decodes a session token
///
/// Fails on a bad signature, a malformed token, or an expired one.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
