//! Post Use Case
//!
//! Create, list, edit and delete posts. Edit and delete are author-only.

use std::collections::HashSet;
use std::sync::Arc;

use kernel::id::{PlatformId, PostId, UserId};

use crate::application::config::DashboardConfig;
use crate::application::events::AnalyticsEvents;
use crate::domain::entity::{post::Post, user::User};
use crate::domain::repository::{
    CommentRepository, LikeRepository, PlatformRepository, PostRepository,
};
use crate::domain::value_object::content::PostContent;
use crate::error::{DashboardError, DashboardResult};

/// A post as seen by one viewer
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub comment_count: u64,
    pub liked_by_viewer: bool,
}

pub struct PostUseCase<P, F, C, L>
where
    P: PostRepository,
    F: PlatformRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    post_repo: Arc<P>,
    platform_repo: Arc<F>,
    comment_repo: Arc<C>,
    like_repo: Arc<L>,
    config: Arc<DashboardConfig>,
    events: AnalyticsEvents,
}

impl<P, F, C, L> PostUseCase<P, F, C, L>
where
    P: PostRepository,
    F: PlatformRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub fn new(
        post_repo: Arc<P>,
        platform_repo: Arc<F>,
        comment_repo: Arc<C>,
        like_repo: Arc<L>,
        config: Arc<DashboardConfig>,
        events: AnalyticsEvents,
    ) -> Self {
        Self {
            post_repo,
            platform_repo,
            comment_repo,
            like_repo,
            config,
            events,
        }
    }

    pub async fn create(
        &self,
        author: &User,
        platform_id: &PlatformId,
        content: &str,
    ) -> DashboardResult<Post> {
        let content = PostContent::new(content, self.config.max_post_length)?;

        if self.platform_repo.find_by_id(platform_id).await?.is_none() {
            return Err(DashboardError::NotFound("Platform"));
        }

        let post = Post::new(*platform_id, author.user_id, author.user_name.clone(), content);
        self.post_repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, platform_id = %platform_id, "Post created");
        self.events.publish(author.user_id);
        Ok(post)
    }

    pub async fn get(&self, post_id: &PostId) -> DashboardResult<Post> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(DashboardError::NotFound("Post"))
    }

    /// Newest first
    pub async fn list_for_platform(
        &self,
        viewer: &UserId,
        platform_id: &PlatformId,
    ) -> DashboardResult<Vec<PostView>> {
        if self.platform_repo.find_by_id(platform_id).await?.is_none() {
            return Err(DashboardError::NotFound("Platform"));
        }
        let posts = self.post_repo.list_by_platform(platform_id).await?;
        self.views(viewer, posts).await
    }

    /// The user's own posts, newest first
    pub async fn list_for_user(&self, user_id: &UserId) -> DashboardResult<Vec<PostView>> {
        let posts = self.post_repo.list_by_user(user_id).await?;
        self.views(user_id, posts).await
    }

    /// Every post, newest first
    pub async fn list_all(&self, viewer: &UserId) -> DashboardResult<Vec<PostView>> {
        let posts = self.post_repo.list_all().await?;
        self.views(viewer, posts).await
    }

    pub async fn edit(
        &self,
        user_id: &UserId,
        post_id: &PostId,
        content: &str,
    ) -> DashboardResult<Post> {
        let mut post = self.get_owned(user_id, post_id).await?;
        post.content = PostContent::new(content, self.config.max_post_length)?;
        self.post_repo.update(&post).await?;

        tracing::info!(post_id = %post_id, "Post edited");
        self.events.publish(*user_id);
        Ok(post)
    }

    /// Comments and likes go with the post
    pub async fn delete(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<()> {
        self.get_owned(user_id, post_id).await?;
        if !self.post_repo.delete(post_id).await? {
            return Err(DashboardError::NotFound("Post"));
        }

        tracing::info!(post_id = %post_id, "Post deleted");
        self.events.publish(*user_id);
        Ok(())
    }

    /// `"<user>: <content> (Posted on <platform>)"`
    pub async fn share_text(&self, post_id: &PostId) -> DashboardResult<String> {
        let post = self.get(post_id).await?;
        let platform = self
            .platform_repo
            .find_by_id(&post.platform_id)
            .await?
            .ok_or(DashboardError::NotFound("Platform"))?;
        Ok(post.share_text(&platform.name))
    }

    async fn get_owned(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<Post> {
        let post = self.get(post_id).await?;
        if !post.is_authored_by(user_id) {
            return Err(DashboardError::NotOwner("post"));
        }
        Ok(post)
    }

    async fn views(&self, viewer: &UserId, posts: Vec<Post>) -> DashboardResult<Vec<PostView>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<PostId> = posts.iter().map(|p| p.post_id).collect();
        let counts = self.comment_repo.count_for_posts(&ids).await?;
        let liked: HashSet<PostId> = self.like_repo.liked_among(viewer, &ids).await?;

        Ok(posts
            .into_iter()
            .map(|post| PostView {
                comment_count: counts.get(&post.post_id).copied().unwrap_or(0),
                liked_by_viewer: liked.contains(&post.post_id),
                post,
            })
            .collect())
    }
}
