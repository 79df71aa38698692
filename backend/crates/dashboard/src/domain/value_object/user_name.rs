//! User Name Value Object
//!
//! Login handle shown next to every post and comment. Unique and
//! case-sensitive.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum user name length in characters (matches the column width)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// Surrounding whitespace is trimmed; inner whitespace is rejected.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        let name = raw.trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty")
                .with_action("Please enter a username"));
        }

        let len = name.chars().count();
        if len > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters (got {})",
                USER_NAME_MAX_LENGTH, len
            )));
        }

        if name.chars().any(char::is_whitespace) {
            return Err(AppError::bad_request("Username cannot contain spaces")
                .with_action("Please remove any spaces from the username"));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Username contains invalid characters"));
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("demo").unwrap().as_str(), "demo");
        assert_eq!(UserName::new("  alice_01 ").unwrap().as_str(), "alice_01");
        assert!(UserName::new("名前").is_ok());
    }

    #[test]
    fn test_case_is_preserved() {
        let name = UserName::new("Demo").unwrap();
        assert_eq!(name.as_str(), "Demo");
        assert_ne!(name, UserName::new("demo").unwrap());
    }

    #[test]
    fn test_invalid_names() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("two words").is_err());
        assert!(UserName::new("tab\there").is_err());
    }

    #[test]
    fn test_length_limit_counts_chars() {
        assert!(UserName::new("a".repeat(50)).is_ok());
        assert!(UserName::new("a".repeat(51)).is_err());
        // 50 multibyte characters are still 50 characters
        assert!(UserName::new("é".repeat(50)).is_ok());
    }
}
