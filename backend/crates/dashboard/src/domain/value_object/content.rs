//! Post and Comment Content
//!
//! Both are trimmed before validation. Length limits come from
//! configuration and are counted in characters.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

/// Body of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostContent(String);

/// Body of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentContent(String);

impl PostContent {
    pub fn new(raw: &str, max_chars: usize) -> AppResult<Self> {
        validate(raw, max_chars, "Post").map(Self)
    }

    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CommentContent {
    pub fn new(raw: &str, max_chars: usize) -> AppResult<Self> {
        validate(raw, max_chars, "Comment").map(Self)
    }

    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(raw: &str, max_chars: usize, what: &str) -> AppResult<String> {
    let content = raw.trim();

    if content.is_empty() {
        return Err(AppError::bad_request(format!("{} cannot be empty", what))
            .with_action("Please write something first"));
    }

    let len = content.chars().count();
    if len > max_chars {
        return Err(AppError::bad_request(format!(
            "{} cannot exceed {} characters (got {})",
            what, max_chars, len
        )));
    }

    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        let post = PostContent::new("  Hello world!  \n", 500).unwrap();
        assert_eq!(post.as_str(), "Hello world!");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(PostContent::new("", 500).is_err());
        assert!(PostContent::new(" \t\n ", 500).is_err());
        let err = CommentContent::new("   ", 250).unwrap_err();
        assert_eq!(err.message(), "Comment cannot be empty");
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(PostContent::new(&"a".repeat(500), 500).is_ok());
        assert!(PostContent::new(&"a".repeat(501), 500).is_err());
        assert!(CommentContent::new(&"b".repeat(250), 250).is_ok());
        assert!(CommentContent::new(&"b".repeat(251), 250).is_err());
    }

    #[test]
    fn test_limit_applies_after_trim() {
        let padded = format!("   {}   ", "a".repeat(500));
        assert!(PostContent::new(&padded, 500).is_ok());
    }
}
