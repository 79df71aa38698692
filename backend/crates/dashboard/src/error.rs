//! Dashboard Error Types
//!
//! Dashboard-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Dashboard-specific result type alias
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Dashboard-specific error variants
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Lookup by id or name found nothing
    #[error("{0} not found")]
    NotFound(&'static str),

    /// User name already exists
    #[error("Username already exists")]
    UserNameTaken,

    /// Unknown user or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Session not found, expired or tampered with
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Caller is not the author of the post or comment
    #[error("Only the author can modify this {0}")]
    NotOwner(&'static str),

    /// Domain validation failure carrying a user-facing hint
    #[error(transparent)]
    App(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::NotFound(_) => ErrorKind::NotFound,
            DashboardError::UserNameTaken => ErrorKind::Conflict,
            DashboardError::InvalidCredentials | DashboardError::SessionInvalid => {
                ErrorKind::Unauthorized
            }
            DashboardError::NotOwner(_) => ErrorKind::Forbidden,
            DashboardError::App(err) => err.kind(),
            DashboardError::Database(_) | DashboardError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Database errors keep their own classification (pool exhaustion is
    /// 503, a dangling foreign key is 404) but never their message.
    pub fn into_app_error(self) -> AppError {
        match self {
            DashboardError::App(err) => err,
            DashboardError::Database(err) => {
                let kind = AppError::from(err).kind();
                let message = if kind.is_server_error() {
                    "Database error"
                } else {
                    "Request conflicts with stored data"
                };
                AppError::new(kind, message)
            }
            DashboardError::Internal(_) => AppError::internal("Internal error"),
            DashboardError::UserNameTaken => AppError::conflict(self.to_string())
                .with_action("Please choose a different username"),
            DashboardError::SessionInvalid => {
                AppError::unauthorized(self.to_string()).with_action("Please sign in again")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DashboardError::Database(e) => {
                tracing::error!(error = %e, "Dashboard database error");
            }
            DashboardError::Internal(msg) => {
                tracing::error!(message = %msg, "Dashboard internal error");
            }
            DashboardError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            DashboardError::NotOwner(what) => {
                tracing::warn!(resource = what, "Modification attempt by non-author");
            }
            DashboardError::App(err) if err.is_server_error() => {
                tracing::error!(error = %err, "Dashboard error");
            }
            _ => {
                tracing::debug!(error = %self, "Dashboard error");
            }
        }
    }
}

impl From<JsonRejection> for DashboardError {
    fn from(rejection: JsonRejection) -> Self {
        DashboardError::App(
            AppError::bad_request(rejection.body_text())
                .with_action("Check the request body and try again"),
        )
    }
}

impl From<PathRejection> for DashboardError {
    fn from(rejection: PathRejection) -> Self {
        DashboardError::App(AppError::bad_request(rejection.body_text()))
    }
}

impl From<QueryRejection> for DashboardError {
    fn from(rejection: QueryRejection) -> Self {
        DashboardError::App(AppError::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(DashboardError::NotFound("Post").kind(), ErrorKind::NotFound);
        assert_eq!(DashboardError::UserNameTaken.kind(), ErrorKind::Conflict);
        assert_eq!(DashboardError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(DashboardError::NotOwner("comment").kind(), ErrorKind::Forbidden);
        assert_eq!(
            DashboardError::from(AppError::bad_request("Post cannot be empty")).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(DashboardError::NotFound("Post").to_string(), "Post not found");
        assert_eq!(
            DashboardError::NotOwner("post").to_string(),
            "Only the author can modify this post"
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = DashboardError::Internal("catalog path /etc/secret".to_string());
        let app = err.into_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("/etc/secret"));
    }

    #[test]
    fn test_validation_keeps_action() {
        let err: DashboardError = AppError::bad_request("Passwords do not match")
            .with_action("Re-enter the confirmation")
            .into();
        let app = err.into_app_error();
        assert_eq!(app.message(), "Passwords do not match");
        assert_eq!(app.action(), Some("Re-enter the confirmation"));
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let app = DashboardError::Database(sqlx::Error::RowNotFound).into_app_error();
        assert_eq!(app.status_code(), 404);
    }
}
