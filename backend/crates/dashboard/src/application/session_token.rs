//! Session Token
//!
//! Cookie value `<session-uuid>.<base64url HMAC-SHA256(session-uuid)>`.
//! The signature lets forged tokens be rejected without a database hit.

use platform::crypto::{from_base64url, hmac_sha256, hmac_sha256_verify, to_base64url};
use uuid::Uuid;

use crate::error::{DashboardError, DashboardResult};

/// Sign a session id
pub fn issue(session_id: Uuid, secret: &[u8]) -> String {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes());
    format!("{}.{}", session_id, to_base64url(&signature))
}

/// Verify the signature and return the session id
pub fn verify(token: &str, secret: &[u8]) -> DashboardResult<Uuid> {
    let (session_id, signature_b64) = token
        .split_once('.')
        .ok_or(DashboardError::SessionInvalid)?;

    let signature = from_base64url(signature_b64).map_err(|_| DashboardError::SessionInvalid)?;

    if !hmac_sha256_verify(secret, session_id.as_bytes(), &signature) {
        return Err(DashboardError::SessionInvalid);
    }

    session_id.parse().map_err(|_| DashboardError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_issue_and_verify() {
        let id = Uuid::new_v4();
        let token = issue(id, SECRET);
        assert!(token.starts_with(&id.to_string()));
        assert_eq!(verify(&token, SECRET).unwrap(), id);
    }

    #[test]
    fn test_wrong_secret() {
        let token = issue(Uuid::new_v4(), SECRET);
        assert!(verify(&token, b"another secret").is_err());
    }

    #[test]
    fn test_tampered_id() {
        let token = issue(Uuid::new_v4(), SECRET);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert!(matches!(verify(&forged, SECRET), Err(DashboardError::SessionInvalid)));
    }

    #[test]
    fn test_malformed() {
        assert!(verify("", SECRET).is_err());
        assert!(verify("no-dot", SECRET).is_err());
        assert!(verify("a.b.c", SECRET).is_err());
        assert!(verify("abc.!!!", SECRET).is_err());
    }
}
