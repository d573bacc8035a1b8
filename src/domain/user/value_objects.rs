use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest username accepted at registration
pub const USERNAME_MAX_LEN: usize = 10;

/// Longest password accepted by the login and register forms
pub const PASSWORD_MAX_LEN: usize = 20;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use bookshelf_api::domain::user::Email;
    ///
    /// let email = Email::new("reader@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "reader@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_string();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Username value object
///
/// # Invariants
/// - 1 to 10 characters once surrounding whitespace is trimmed
/// - No whitespace inside the name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a new Username value object
    ///
    /// # Example
    /// ```
    /// use bookshelf_api::domain::user::Username;
    ///
    /// let name = Username::new(" alice ").expect("valid username");
    /// assert_eq!(name.as_str(), "alice");
    /// assert!(Username::new("much-too-long-name").is_err());
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, String> {
        let username = username.into().trim().to_string();

        if username.is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if username.chars().count() > USERNAME_MAX_LEN {
            return Err(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LEN
            ));
        }
        if username.chars().any(char::is_whitespace) {
            return Err("Username cannot contain whitespace".to_string());
        }

        Ok(Username(username))
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plaintext password as submitted by a form
///
/// Never serialized and never printed; `Debug` redacts the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validates the length limits of the login and register forms
    pub fn new(password: impl Into<String>) -> Result<Self, String> {
        let password = password.into();

        if password.is_empty() {
            return Err("Password cannot be empty".to_string());
        }
        if password.chars().count() > PASSWORD_MAX_LEN {
            return Err(format!(
                "Password must be at most {} characters",
                PASSWORD_MAX_LEN
            ));
        }

        Ok(Password(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_minimum_length() {
        assert!(Email::new("a@b").is_ok());
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_too_short() {
        assert!(Email::new("a@").is_err());
    }

    #[test]
    fn email_is_trimmed() {
        let email = Email::new("  reader@example.com ").unwrap();
        assert_eq!(email.as_str(), "reader@example.com");
    }

    #[test]
    fn username_at_limit() {
        assert!(Username::new("abcdefghij").is_ok());
    }

    #[test]
    fn username_over_limit() {
        assert!(Username::new("abcdefghijk").is_err());
    }

    #[test]
    fn username_empty() {
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn username_inner_whitespace() {
        assert!(Username::new("ann lee").is_err());
    }

    #[test]
    fn username_display() {
        let name = Username::new("bob").unwrap();
        assert_eq!(name.to_string(), "bob");
    }

    #[test]
    fn password_limits() {
        assert!(Password::new("").is_err());
        assert!(Password::new("a".repeat(20)).is_ok());
        assert!(Password::new("a".repeat(21)).is_err());
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2").unwrap();
        assert!(!format!("{:?}", password).contains("hunter2"));
    }
}
