//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PlatformId, PostId, UserId};

use crate::domain::value_object::{content::PostContent, user_name::UserName};

/// A post on one platform
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub platform_id: PlatformId,
    pub user_id: UserId,
    /// Author's user name at the time of posting
    pub user_name: UserName,
    pub content: PostContent,
    pub posted_at: DateTime<Utc>,
    /// Cached like count, refreshed on every like toggle
    pub likes: u32,
}

impl Post {
    pub fn new(
        platform_id: PlatformId,
        user_id: UserId,
        user_name: UserName,
        content: PostContent,
    ) -> Self {
        Self {
            post_id: PostId::new(),
            platform_id,
            user_id,
            user_name,
            content,
            posted_at: Utc::now(),
            likes: 0,
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// `"<user>: <content> (Posted on <platform>)"`
    pub fn share_text(&self, platform_name: &str) -> String {
        format!(
            "{}: {} (Posted on {})",
            self.user_name,
            self.content.as_str(),
            platform_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text() {
        let post = Post::new(
            PlatformId::new(),
            UserId::new(),
            UserName::from_db("demo"),
            PostContent::from_db("Hello #world"),
        );
        assert_eq!(
            post.share_text("Instagram"),
            "demo: Hello #world (Posted on Instagram)"
        );
    }

    #[test]
    fn test_authorship() {
        let author = UserId::new();
        let post = Post::new(
            PlatformId::new(),
            author,
            UserName::from_db("demo"),
            PostContent::from_db("x"),
        );
        assert!(post.is_authored_by(&author));
        assert!(!post.is_authored_by(&UserId::new()));
        assert_eq!(post.likes, 0);
    }
}
