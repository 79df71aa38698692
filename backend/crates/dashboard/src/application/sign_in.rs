//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::fmt;
use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::DashboardConfig;
use crate::application::session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{DashboardError, DashboardResult};

/// Checked when the user name is unknown so that path also does one digest
const UNKNOWN_USER_RECORD: &str =
    "AAAAAAAAAAAAAAAAAAAAAA==:AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
    pub remember_me: bool,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_id: UserId,
    pub user_name: UserName,
    pub remember_me: bool,
    pub expires_at_ms: i64,
}

impl fmt::Debug for SignInOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInOutput")
            .field("session_token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .field("remember_me", &self.remember_me)
            .field("expires_at_ms", &self.expires_at_ms)
            .finish()
    }
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<DashboardConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<DashboardConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> DashboardResult<SignInOutput> {
        // Every failure below is reported as InvalidCredentials.
        let user_name =
            UserName::new(input.user_name).map_err(|_| DashboardError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| DashboardError::InvalidCredentials)?;

        let Some(user) = self.user_repo.find_by_user_name(&user_name).await? else {
            let _ = UserPassword::from_db(UNKNOWN_USER_RECORD).verify(&raw_password);
            return Err(DashboardError::InvalidCredentials);
        };

        if !user.password.verify(&raw_password) {
            if !user.password.is_well_formed() {
                tracing::warn!(user_id = %user.user_id, "Stored credential record is malformed");
            }
            return Err(DashboardError::InvalidCredentials);
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl(input.remember_me))
            .map_err(|e| DashboardError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::new(user.user_id, input.remember_me, ttl);

        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            remember_me = input.remember_me,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: user.user_id,
            user_name: user.user_name,
            remember_me: input.remember_me,
            expires_at_ms: session.expires_at_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_record_is_well_formed() {
        let record = UserPassword::from_db(UNKNOWN_USER_RECORD);
        assert!(record.is_well_formed());

        let password = RawPassword::new("password".to_string()).unwrap();
        assert!(!record.verify(&password));
    }

    #[test]
    fn test_output_debug_hides_token() {
        let output = SignInOutput {
            session_token: "c2Vzc2lvbg.c2lnbmF0dXJl".to_string(),
            user_id: UserId::new(),
            user_name: UserName::new("alice".to_string()).unwrap(),
            remember_me: false,
            expires_at_ms: 0,
        };
        let debug = format!("{output:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("c2lnbmF0dXJl"));
        assert!(debug.contains("alice"));
    }
}
