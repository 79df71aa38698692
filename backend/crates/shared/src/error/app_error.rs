//! [`AppError`], the error every layer eventually reports, and the
//! [`ProblemDetails`] body it is rendered as.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;

/// A user-facing failure.
///
/// The message and the optional action are shown to the user. The source is
/// kept for logs only.
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::bad_request("Post content cannot be empty")
///     .with_action("Write something before posting");
/// assert_eq!(err.status_code(), 400);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    action: Option<Text>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

/// RFC 7807 problem details body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    pub fn bad_request(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn service_unavailable(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    /// Hint telling the user what to do next
    pub fn with_action(mut self, action: impl Into<Text>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Underlying cause, logged but never sent to clients
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    pub fn problem_details(&self) -> ProblemDetails {
        let status = self.status_code();
        ProblemDetails {
            type_uri: format!("https://httpstatuses.io/{status}"),
            title: self.kind.title(),
            status,
            detail: self.message.to_string(),
            action: self.action.as_ref().map(|a| a.to_string()),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " ({action})")?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_stays_out_of_the_body() {
        let io_err = std::io::Error::other("catalog.json: permission denied");
        let err = AppError::internal("Failed to load assistant responses").with_source(io_err);
        assert!(err.source().is_some());

        let body = serde_json::to_value(err.problem_details()).unwrap();
        assert!(!body.to_string().contains("permission denied"));
        assert_eq!(body["status"], 500);
    }

    #[test]
    fn test_problem_details_for_taken_user_name() {
        let err = AppError::conflict("Username already exists")
            .with_action("Please choose a different one");
        let details = err.problem_details();
        assert_eq!(details.status, 409);
        assert_eq!(details.title, "Conflict");

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["type"], "https://httpstatuses.io/409");
        assert_eq!(json["detail"], "Username already exists");
        assert_eq!(json["action"], "Please choose a different one");
    }

    #[test]
    fn test_action_is_omitted_when_absent() {
        let bare = serde_json::to_value(AppError::not_found("Post not found").problem_details())
            .unwrap();
        assert!(bare.get("action").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::not_found("Post not found").to_string(),
            "[Not Found] Post not found"
        );
        assert_eq!(
            AppError::unauthorized("Invalid username or password")
                .with_action("Try again")
                .to_string(),
            "[Unauthorized] Invalid username or password (Try again)"
        );
    }
}
