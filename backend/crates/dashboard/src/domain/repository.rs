//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use std::collections::{HashMap, HashSet};

use kernel::id::{CommentId, PlatformId, PostId, UserId};
use uuid::Uuid;

use crate::domain::entity::{
    comment::Comment, platform::SocialPlatform, post::Post, session::Session, user::User,
};
use crate::domain::value_object::user_name::UserName;
use crate::error::DashboardResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user. A taken user name yields `UserNameTaken`.
    async fn create(&self, user: &User) -> DashboardResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> DashboardResult<Option<User>>;

    async fn find_by_user_name(&self, user_name: &UserName) -> DashboardResult<Option<User>>;

    async fn exists_by_user_name(&self, user_name: &UserName) -> DashboardResult<bool>;

    /// Update profile fields and theme
    async fn update(&self, user: &User) -> DashboardResult<()>;
}

/// Platform repository trait
#[trait_variant::make(PlatformRepository: Send)]
pub trait LocalPlatformRepository {
    async fn create(&self, platform: &SocialPlatform) -> DashboardResult<()>;

    async fn find_by_id(&self, platform_id: &PlatformId) -> DashboardResult<Option<SocialPlatform>>;

    async fn find_by_name(&self, name: &str) -> DashboardResult<Option<SocialPlatform>>;

    /// All platforms ordered by name
    async fn list(&self) -> DashboardResult<Vec<SocialPlatform>>;

    async fn update(&self, platform: &SocialPlatform) -> DashboardResult<()>;

    /// Delete a platform and, by cascade, its posts
    async fn delete(&self, platform_id: &PlatformId) -> DashboardResult<bool>;

    async fn count(&self) -> DashboardResult<u64>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create(&self, post: &Post) -> DashboardResult<()>;

    async fn find_by_id(&self, post_id: &PostId) -> DashboardResult<Option<Post>>;

    /// Newest first
    async fn list_by_platform(&self, platform_id: &PlatformId) -> DashboardResult<Vec<Post>>;

    /// Newest first
    async fn list_by_user(&self, user_id: &UserId) -> DashboardResult<Vec<Post>>;

    /// Newest first
    async fn list_all(&self) -> DashboardResult<Vec<Post>>;

    /// Persist edited content
    async fn update(&self, post: &Post) -> DashboardResult<()>;

    /// Overwrite the cached like count
    async fn set_like_count(&self, post_id: &PostId, likes: u32) -> DashboardResult<()>;

    /// Delete a post and, by cascade, its comments and likes
    async fn delete(&self, post_id: &PostId) -> DashboardResult<bool>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    async fn create(&self, comment: &Comment) -> DashboardResult<()>;

    async fn find_by_id(&self, comment_id: &CommentId) -> DashboardResult<Option<Comment>>;

    /// Oldest first
    async fn list_by_post(&self, post_id: &PostId) -> DashboardResult<Vec<Comment>>;

    /// Newest first
    async fn list_by_user(&self, user_id: &UserId) -> DashboardResult<Vec<Comment>>;

    async fn update(&self, comment: &Comment) -> DashboardResult<()>;

    async fn delete(&self, comment_id: &CommentId) -> DashboardResult<bool>;

    async fn count_for_post(&self, post_id: &PostId) -> DashboardResult<u64>;

    /// Comment count per post; posts without comments are absent
    async fn count_for_posts(&self, post_ids: &[PostId]) -> DashboardResult<HashMap<PostId, u64>>;
}

/// Like repository trait
///
/// A like is a (user, post) pair; adding twice or removing a missing pair
/// is a no-op.
#[trait_variant::make(LikeRepository: Send)]
pub trait LocalLikeRepository {
    async fn has_liked(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<bool>;

    /// Remove the like if present, otherwise add it, as one atomic step.
    /// Returns whether the user likes the post afterwards.
    async fn toggle(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<bool>;

    async fn count_for_post(&self, post_id: &PostId) -> DashboardResult<u64>;

    /// User names of everyone who liked the post, oldest like first
    async fn users_who_liked(&self, post_id: &PostId) -> DashboardResult<Vec<UserName>>;

    /// Subset of `post_ids` the user has liked
    async fn liked_among(
        &self,
        user_id: &UserId,
        post_ids: &[PostId],
    ) -> DashboardResult<HashSet<PostId>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn create(&self, session: &Session) -> DashboardResult<()>;

    /// Find an unexpired session
    async fn find_by_id(&self, session_id: Uuid) -> DashboardResult<Option<Session>>;

    async fn delete(&self, session_id: Uuid) -> DashboardResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> DashboardResult<u64>;
}

/// Everything the HTTP layer needs from one store
pub trait DashboardStore:
    UserRepository
    + PlatformRepository
    + PostRepository
    + CommentRepository
    + LikeRepository
    + SessionRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> DashboardStore for T where
    T: UserRepository
        + PlatformRepository
        + PostRepository
        + CommentRepository
        + LikeRepository
        + SessionRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
