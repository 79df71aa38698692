//! Comment Use Case

use std::sync::Arc;

use kernel::id::{CommentId, PostId, UserId};

use crate::application::config::DashboardConfig;
use crate::application::events::AnalyticsEvents;
use crate::domain::entity::{comment::Comment, user::User};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::content::CommentContent;
use crate::error::{DashboardError, DashboardResult};

pub struct CommentUseCase<C, P>
where
    C: CommentRepository,
    P: PostRepository,
{
    comment_repo: Arc<C>,
    post_repo: Arc<P>,
    config: Arc<DashboardConfig>,
    events: AnalyticsEvents,
}

impl<C, P> CommentUseCase<C, P>
where
    C: CommentRepository,
    P: PostRepository,
{
    pub fn new(
        comment_repo: Arc<C>,
        post_repo: Arc<P>,
        config: Arc<DashboardConfig>,
        events: AnalyticsEvents,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            config,
            events,
        }
    }

    pub async fn create(
        &self,
        author: &User,
        post_id: &PostId,
        content: &str,
    ) -> DashboardResult<Comment> {
        let content = CommentContent::new(content, self.config.max_comment_length)?;
        let post_author = self.post_author(post_id).await?;

        let comment = Comment::new(*post_id, author.user_id, author.user_name.clone(), content);
        self.comment_repo.create(&comment).await?;

        tracing::info!(comment_id = %comment.comment_id, post_id = %post_id, "Comment added");
        self.events.publish(post_author);
        Ok(comment)
    }

    pub async fn get(&self, comment_id: &CommentId) -> DashboardResult<Comment> {
        self.comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or(DashboardError::NotFound("Comment"))
    }

    /// Oldest first
    pub async fn list_for_post(&self, post_id: &PostId) -> DashboardResult<Vec<Comment>> {
        self.post_author(post_id).await?;
        self.comment_repo.list_by_post(post_id).await
    }

    /// Newest first
    pub async fn list_for_user(&self, user_id: &UserId) -> DashboardResult<Vec<Comment>> {
        self.comment_repo.list_by_user(user_id).await
    }

    pub async fn count(&self, post_id: &PostId) -> DashboardResult<u64> {
        self.comment_repo.count_for_post(post_id).await
    }

    pub async fn edit(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
        content: &str,
    ) -> DashboardResult<Comment> {
        let mut comment = self.get_owned(user_id, comment_id).await?;
        comment.content = CommentContent::new(content, self.config.max_comment_length)?;
        self.comment_repo.update(&comment).await?;

        tracing::info!(comment_id = %comment_id, "Comment edited");
        self.notify_post_author(&comment.post_id).await;
        Ok(comment)
    }

    pub async fn delete(&self, user_id: &UserId, comment_id: &CommentId) -> DashboardResult<()> {
        let comment = self.get_owned(user_id, comment_id).await?;
        if !self.comment_repo.delete(comment_id).await? {
            return Err(DashboardError::NotFound("Comment"));
        }

        tracing::info!(comment_id = %comment_id, "Comment deleted");
        self.notify_post_author(&comment.post_id).await;
        Ok(())
    }

    async fn get_owned(&self, user_id: &UserId, comment_id: &CommentId) -> DashboardResult<Comment> {
        let comment = self.get(comment_id).await?;
        if !comment.is_authored_by(user_id) {
            return Err(DashboardError::NotOwner("comment"));
        }
        Ok(comment)
    }

    async fn post_author(&self, post_id: &PostId) -> DashboardResult<UserId> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .map(|post| post.user_id)
            .ok_or(DashboardError::NotFound("Post"))
    }

    async fn notify_post_author(&self, post_id: &PostId) {
        match self.post_author(post_id).await {
            Ok(author) => self.events.publish(author),
            Err(e) => tracing::debug!(error = %e, "No post author to notify"),
        }
    }
}
