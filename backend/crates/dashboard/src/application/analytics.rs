//! Analytics Use Case
//!
//! Loads one user's posts and platforms and runs the pure aggregations in
//! `domain::services::analytics`.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use kernel::id::{PostId, UserId};

use crate::application::config::DashboardConfig;
use crate::application::events::AnalyticsEvents;
use crate::domain::repository::{CommentRepository, PlatformRepository, PostRepository};
use crate::domain::services::analytics::{
    DailyActivity, EngagementDistribution, EngagementSummary, PlatformPostCount, daily_activity,
    engagement_distribution, posts_by_platform, summarize,
};
use crate::error::DashboardResult;

/// Everything the analytics view shows
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub summary: EngagementSummary,
    pub posts_by_platform: Vec<PlatformPostCount>,
    pub engagement: EngagementDistribution,
    pub activity: Vec<DailyActivity>,
}

pub struct AnalyticsUseCase<P, F, C>
where
    P: PostRepository,
    F: PlatformRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    platform_repo: Arc<F>,
    comment_repo: Arc<C>,
    config: Arc<DashboardConfig>,
}

impl<P, F, C> AnalyticsUseCase<P, F, C>
where
    P: PostRepository,
    F: PlatformRepository,
    C: CommentRepository,
{
    pub fn new(
        post_repo: Arc<P>,
        platform_repo: Arc<F>,
        comment_repo: Arc<C>,
        config: Arc<DashboardConfig>,
    ) -> Self {
        Self {
            post_repo,
            platform_repo,
            comment_repo,
            config,
        }
    }

    /// Report for `user_id`; `today` is the last day of the activity series
    pub async fn report(&self, user_id: &UserId, today: NaiveDate) -> DashboardResult<AnalyticsReport> {
        let posts = self.post_repo.list_by_user(user_id).await?;
        let platforms = self.platform_repo.list().await?;

        let ids: Vec<PostId> = posts.iter().map(|p| p.post_id).collect();
        let comment_counts = if ids.is_empty() {
            Default::default()
        } else {
            self.comment_repo.count_for_posts(&ids).await?
        };

        let summary = summarize(&posts, &comment_counts);

        Ok(AnalyticsReport {
            posts_by_platform: posts_by_platform(&platforms, &posts),
            engagement: engagement_distribution(&summary),
            activity: daily_activity(&posts, today, self.config.activity_window_days),
            summary,
        })
    }
}

/// Wait for an analytics change concerning `user_id`, capped at the
/// configured maximum
pub async fn wait_for_change(
    events: &AnalyticsEvents,
    config: &DashboardConfig,
    user_id: UserId,
    requested: Option<Duration>,
) -> bool {
    let timeout = requested
        .unwrap_or(config.analytics_wait_max)
        .min(config.analytics_wait_max);
    events.wait_for(user_id, timeout).await
}
