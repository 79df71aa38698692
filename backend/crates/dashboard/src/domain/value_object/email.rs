//! Email Value Object
//!
//! Represents a contact address. Only a shape check is done: the address
//! must contain `@` and `.`; nothing is ever sent to it.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum email length (matches the column width)
const EMAIL_MAX_LENGTH: usize = 100;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::bad_request("Please enter a valid email address")
                .with_action("An email address looks like name@example.com"));
        }

        Ok(Self(email.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("demo@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert_eq!(Email::new("  a@b.c ").unwrap().as_str(), "a@b.c");
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@example").is_err());
        let long = format!("{}@example.com", "a".repeat(95));
        assert!(Email::new(long).is_err());
    }

    #[test]
    fn test_from_str() {
        let email: Email = "demo@example.com".parse().unwrap();
        assert_eq!(email.to_string(), "demo@example.com");
    }
}
