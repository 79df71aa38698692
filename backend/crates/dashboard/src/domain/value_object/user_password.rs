//! User Password Value Object
//!
//! Domain wrappers over `platform::credential`.
//!
//! ## Usage
//! ```rust
//! use dashboard::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("password".to_string()).unwrap();
//! let stored = UserPassword::from_raw(&raw);
//! assert!(stored.verify(&raw));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::credential::{CredentialInputError, CredentialRecord, PlainCredential};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input, zeroized on drop
pub struct RawPassword(PlainCredential);

impl RawPassword {
    /// Only emptiness is rejected; the text is hashed exactly as typed.
    pub fn new(raw: String) -> AppResult<Self> {
        let credential = PlainCredential::new(raw).map_err(|e| match e {
            CredentialInputError::Empty => AppError::bad_request("Password cannot be empty")
                .with_action("Please enter a password"),
        })?;

        Ok(Self(credential))
    }

    /// Constant-time comparison with a confirmation field
    pub fn matches(&self, other: &RawPassword) -> bool {
        self.0.matches(&other.0)
    }

    pub(crate) fn inner(&self) -> &PlainCredential {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Salted credential record stored with the user
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(CredentialRecord);

impl UserPassword {
    /// Hash with a fresh salt
    pub fn from_raw(raw: &RawPassword) -> Self {
        Self(raw.inner().hash())
    }

    /// Wrap a stored record. A damaged record is accepted here and simply
    /// never verifies.
    pub fn from_db(record: impl Into<String>) -> Self {
        Self(CredentialRecord::from_stored(record))
    }

    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_well_formed(&self) -> bool {
        self.0.is_well_formed()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("password".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw);
        assert!(stored.is_well_formed());
        assert!(stored.verify(&raw));

        let wrong = RawPassword::new("Password".to_string()).unwrap();
        assert!(!stored.verify(&wrong));
    }

    #[test]
    fn test_empty_rejected() {
        let err = RawPassword::new(String::new()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.action().is_some());
    }

    #[test]
    fn test_whitespace_is_significant() {
        let raw = RawPassword::new(" pass ".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw);
        assert!(!stored.verify(&RawPassword::new("pass".to_string()).unwrap()));
    }

    #[test]
    fn test_damaged_record_never_verifies() {
        let raw = RawPassword::new("password".to_string()).unwrap();
        let stored = UserPassword::from_db("password");
        assert!(!stored.is_well_formed());
        assert!(!stored.verify(&raw));
    }

    #[test]
    fn test_matches() {
        let a = RawPassword::new("secret".to_string()).unwrap();
        let b = RawPassword::new("secret".to_string()).unwrap();
        let c = RawPassword::new("secreT".to_string()).unwrap();
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_debug_redacted() {
        let raw = RawPassword::new("hunter2".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("hunter2"));
        let stored = UserPassword::from_raw(&raw);
        assert!(!format!("{:?}", stored).contains(stored.as_str()));
    }
}
