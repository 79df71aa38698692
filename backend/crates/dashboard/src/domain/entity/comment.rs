//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

use crate::domain::value_object::{content::CommentContent, user_name::UserName};

#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub user_name: UserName,
    pub content: CommentContent,
    pub commented_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: PostId, user_id: UserId, user_name: UserName, content: CommentContent) -> Self {
        Self {
            comment_id: CommentId::new(),
            post_id,
            user_id,
            user_name,
            content,
            commented_at: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
