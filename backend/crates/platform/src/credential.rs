//! Credential Hashing and Verification
//!
//! Salted SHA-256 credential records of the form `<base64 salt>:<base64 digest>`,
//! where the digest is computed over `salt ‖ credential` (UTF-8 bytes).
//!
//! ## Guarantees
//! - A fresh 16-byte salt is drawn from the OS random source on every hash
//! - Standard base64 never contains `:`, so a record always splits in two
//! - Verification fails closed: malformed records yield `false`, never an error
//! - Digests are compared in constant time
//!
//! ## Examples
//! ```rust
//! use platform::credential::{CredentialRecord, PlainCredential};
//!
//! let credential = PlainCredential::new("password".to_string()).unwrap();
//! let record = credential.hash();
//!
//! assert!(record.verify(&credential));
//! assert!(!CredentialRecord::from_stored("onlyonefield").verify(&credential));
//! ```

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, from_base64, random_bytes, sha256_concat, to_base64};

/// Salt length in bytes
pub const SALT_LENGTH: usize = 16;

/// Digest length in bytes (SHA-256)
pub const DIGEST_LENGTH: usize = 32;

/// Separator between the encoded salt and the encoded digest
pub const RECORD_DELIMITER: char = ':';

/// Rejected credential input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialInputError {
    #[error("Credential cannot be empty")]
    Empty,
}

// ============================================================================
// Plain credential (zeroized on drop)
// ============================================================================

/// Plaintext credential as typed by the user
///
/// Memory is wiped on drop. Not `Clone`, and `Debug` is redacted, so the
/// plaintext cannot end up in logs by accident.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainCredential(String);

impl PlainCredential {
    /// Accept any non-empty text. No trimming or normalization is applied:
    /// the exact bytes typed are the bytes hashed.
    pub fn new(raw: String) -> Result<Self, CredentialInputError> {
        if raw.is_empty() {
            return Err(CredentialInputError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with a freshly generated salt
    pub fn hash(&self) -> CredentialRecord {
        let salt = random_bytes(SALT_LENGTH);
        derive_record(&salt, self.as_bytes())
    }

    /// Constant-time equality of two plaintexts (password confirmation)
    pub fn matches(&self, other: &PlainCredential) -> bool {
        constant_time_eq(self.as_bytes(), other.as_bytes())
    }
}

impl fmt::Debug for PlainCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainCredential")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Credential record (safe to store)
// ============================================================================

/// Stored `<salt>:<digest>` text
///
/// Constructing from storage never fails; a damaged record simply never
/// verifies.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord(String);

impl CredentialRecord {
    /// Wrap a record read back from storage
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Text for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True only if `credential` is the plaintext this record was made from
    pub fn verify(&self, credential: &PlainCredential) -> bool {
        verify_bytes(credential.as_bytes(), &self.0)
    }

    /// Whether the record has the expected two-field shape with decodable
    /// parts of the expected lengths
    pub fn is_well_formed(&self) -> bool {
        let Some((salt, digest)) = split_record(&self.0) else {
            return false;
        };
        matches!(from_base64(salt), Ok(s) if s.len() == SALT_LENGTH)
            && matches!(from_base64(digest), Ok(d) if d.len() == DIGEST_LENGTH)
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("record", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Hash `plaintext` into a new record; empty input is rejected
pub fn hash_credential(plaintext: &str) -> Result<CredentialRecord, CredentialInputError> {
    PlainCredential::new(plaintext.to_string()).map(|credential| credential.hash())
}

/// Check `plaintext` against a stored record. Never fails; any malformed
/// input is reported as a mismatch.
pub fn verify_credential(plaintext: &str, record: &str) -> bool {
    verify_bytes(plaintext.as_bytes(), record)
}

fn derive_record(salt: &[u8], plaintext: &[u8]) -> CredentialRecord {
    let digest = sha256_concat(&[salt, plaintext]);
    CredentialRecord(format!(
        "{}{}{}",
        to_base64(salt),
        RECORD_DELIMITER,
        to_base64(&digest)
    ))
}

fn split_record(record: &str) -> Option<(&str, &str)> {
    let mut fields = record.split(RECORD_DELIMITER);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(salt), Some(digest), None) => Some((salt, digest)),
        _ => None,
    }
}

fn verify_bytes(plaintext: &[u8], record: &str) -> bool {
    let Some((salt_b64, digest_b64)) = split_record(record) else {
        return false;
    };
    let Ok(salt) = from_base64(salt_b64) else {
        return false;
    };
    let Ok(stored) = from_base64(digest_b64) else {
        return false;
    };

    let computed = sha256_concat(&[&salt, plaintext]);
    constant_time_eq(&computed, &stored)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256;

    fn credential(s: &str) -> PlainCredential {
        PlainCredential::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_empty_credential_rejected() {
        assert_eq!(
            PlainCredential::new(String::new()).unwrap_err(),
            CredentialInputError::Empty
        );
        // Whitespace is still text
        assert!(PlainCredential::new(" ".to_string()).is_ok());
    }

    #[test]
    fn test_hash_then_verify() {
        let password = credential("password");
        let record = password.hash();
        assert!(record.verify(&password));
        assert!(!record.verify(&credential("pass word")));
        assert!(!record.verify(&credential("Password")));
    }

    #[test]
    fn test_record_shape() {
        let record = hash_credential("password").unwrap();
        let (salt, digest) = record.as_str().split_once(':').unwrap();
        assert_eq!(salt.len(), 24);
        assert_eq!(digest.len(), 44);
        assert!(record.is_well_formed());
        assert_eq!(record.as_str().matches(RECORD_DELIMITER).count(), 1);
    }

    #[test]
    fn test_hash_rejects_empty_input() {
        assert_eq!(hash_credential(""), Err(CredentialInputError::Empty));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_credential("password").unwrap();
        let b = hash_credential("password").unwrap();
        assert_ne!(a, b);
        assert!(verify_credential("password", a.as_str()));
        assert!(verify_credential("password", b.as_str()));
    }

    #[test]
    fn test_known_salt_layout() {
        let salt = [0u8; SALT_LENGTH];
        let record = derive_record(&salt, b"password");

        let mut input = salt.to_vec();
        input.extend_from_slice(b"password");
        let expected = format!("AAAAAAAAAAAAAAAAAAAAAA==:{}", to_base64(&sha256(&input)));

        assert_eq!(record.as_str(), expected);
        assert!(verify_credential("password", &expected));
    }

    #[test]
    fn test_malformed_records_fail_closed() {
        for bad in [
            "",
            "not-a-valid-record",
            "onlyonefield",
            ":",
            "a:b:c",
            "!!!!:AAAA",
            "AAAAAAAAAAAAAAAAAAAAAA==:%%%",
        ] {
            assert!(!verify_credential("password", bad), "accepted {bad:?}");
            assert!(!CredentialRecord::from_stored(bad).is_well_formed());
        }
    }

    #[test]
    fn test_truncated_digest_rejected() {
        let record = hash_credential("password").unwrap();
        let (salt, digest) = record.as_str().split_once(':').unwrap();
        let truncated = format!("{}:{}", salt, &digest[..40]);
        assert!(!verify_credential("password", &truncated));
    }

    #[test]
    fn test_unicode_credential() {
        let record = hash_credential("パスワード安全です!").unwrap();
        assert!(verify_credential("パスワード安全です!", record.as_str()));
        assert!(!verify_credential("パスワード安全です", record.as_str()));
    }

    #[test]
    fn test_concurrent_use() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let plaintext = format!("secret-{i}");
                    let record = hash_credential(&plaintext).unwrap();
                    verify_credential(&plaintext, record.as_str())
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_debug_redaction() {
        let password = credential("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let record = password.hash();
        assert!(!format!("{:?}", record).contains(record.as_str()));
    }

    #[test]
    fn test_matches() {
        assert!(credential("abc").matches(&credential("abc")));
        assert!(!credential("abc").matches(&credential("abd")));
    }
}
