//! Session Entity
//!
//! Server-side session referenced by a signed cookie token.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub user_id: UserId,
    /// Whether "Remember Me" was checked
    pub remember_me: bool,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, remember_me: bool, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            remember_me,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let session = Session::new(UserId::new(), false, Duration::hours(12));
        assert!(!session.is_expired());

        let expired = Session::new(UserId::new(), false, Duration::milliseconds(-1));
        assert!(expired.is_expired());
    }

    #[test]
    fn test_remember_me_lives_longer() {
        let short = Session::new(UserId::new(), false, Duration::hours(12));
        let long = Session::new(UserId::new(), true, Duration::days(7));
        assert!(long.expires_at_ms > short.expires_at_ms);
        assert!(long.remember_me);
    }
}
