//! Like Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::application::events::AnalyticsEvents;
use crate::domain::repository::{LikeRepository, PostRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{DashboardError, DashboardResult};

/// State after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggleOutput {
    pub liked: bool,
    pub likes: u64,
}

pub struct LikeUseCase<L, P>
where
    L: LikeRepository,
    P: PostRepository,
{
    like_repo: Arc<L>,
    post_repo: Arc<P>,
    events: AnalyticsEvents,
}

impl<L, P> LikeUseCase<L, P>
where
    L: LikeRepository,
    P: PostRepository,
{
    pub fn new(like_repo: Arc<L>, post_repo: Arc<P>, events: AnalyticsEvents) -> Self {
        Self {
            like_repo,
            post_repo,
            events,
        }
    }

    pub async fn has_liked(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<bool> {
        self.like_repo.has_liked(user_id, post_id).await
    }

    /// Like or unlike, then refresh the post's cached count from the
    /// like table
    pub async fn toggle(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<LikeToggleOutput> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(DashboardError::NotFound("Post"))?;

        let liked = self.like_repo.toggle(user_id, post_id).await?;

        let likes = self.like_repo.count_for_post(post_id).await?;
        self.post_repo
            .set_like_count(post_id, u32::try_from(likes).unwrap_or(u32::MAX))
            .await?;

        tracing::debug!(post_id = %post_id, liked, likes, "Like toggled");
        self.events.publish(post.user_id);

        Ok(LikeToggleOutput { liked, likes })
    }

    pub async fn count(&self, post_id: &PostId) -> DashboardResult<u64> {
        self.like_repo.count_for_post(post_id).await
    }

    pub async fn likers(&self, post_id: &PostId) -> DashboardResult<Vec<UserName>> {
        self.like_repo.users_who_liked(post_id).await
    }
}
