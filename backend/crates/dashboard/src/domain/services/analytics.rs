//! Engagement Analytics
//!
//! Aggregations over one user's posts. Callers load the data; everything
//! here is pure.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use kernel::id::{PlatformId, PostId};
use serde::Serialize;

use crate::domain::entity::{platform::SocialPlatform, post::Post};

/// Days before today covered by the activity series (today is included,
/// giving one more bucket than this)
pub const ACTIVITY_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    pub total_posts: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub average_likes_per_post: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPostCount {
    pub platform_id: PlatformId,
    pub name: String,
    pub color: Option<String>,
    pub posts: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementDistribution {
    pub likes: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub posts: u64,
}

/// Totals over `posts`. Likes come from the cached count on each post;
/// comments from `comment_counts`, where a missing post counts as zero.
pub fn summarize(posts: &[Post], comment_counts: &HashMap<PostId, u64>) -> EngagementSummary {
    let total_posts = posts.len() as u64;
    let total_likes: u64 = posts.iter().map(|p| u64::from(p.likes)).sum();
    let total_comments: u64 = posts
        .iter()
        .map(|p| comment_counts.get(&p.post_id).copied().unwrap_or(0))
        .sum();

    let average_likes_per_post = if total_posts == 0 {
        0.0
    } else {
        total_likes as f64 / total_posts as f64
    };

    EngagementSummary {
        total_posts,
        total_likes,
        total_comments,
        average_likes_per_post,
    }
}

/// Post count for every platform, in platform order, zeros included
pub fn posts_by_platform(platforms: &[SocialPlatform], posts: &[Post]) -> Vec<PlatformPostCount> {
    let mut counts: HashMap<PlatformId, u64> = HashMap::new();
    for post in posts {
        *counts.entry(post.platform_id).or_default() += 1;
    }

    platforms
        .iter()
        .map(|platform| PlatformPostCount {
            platform_id: platform.platform_id,
            name: platform.name.clone(),
            color: platform.color.clone(),
            posts: counts.get(&platform.platform_id).copied().unwrap_or(0),
        })
        .collect()
}

pub fn engagement_distribution(summary: &EngagementSummary) -> EngagementDistribution {
    EngagementDistribution {
        likes: summary.total_likes,
        comments: summary.total_comments,
    }
}

/// Posts per UTC day from `today - window_days` to `today`, oldest first.
/// Days without posts are present with a zero count; posts outside the
/// window are ignored.
pub fn daily_activity(posts: &[Post], today: NaiveDate, window_days: u32) -> Vec<DailyActivity> {
    let start = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
    for post in posts {
        let day = post.posted_at.date_naive();
        if day >= start && day <= today {
            *counts.entry(day).or_default() += 1;
        }
    }

    start
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|date| DailyActivity {
            date,
            posts: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kernel::id::UserId;

    use crate::domain::value_object::{content::PostContent, user_name::UserName};

    fn post_on(platform_id: PlatformId, likes: u32, y: i32, m: u32, d: u32) -> Post {
        let mut post = Post::new(
            platform_id,
            UserId::new(),
            UserName::from_db("demo"),
            PostContent::from_db("hello"),
        );
        post.likes = likes;
        post.posted_at = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        post
    }

    fn platform(name: &str) -> SocialPlatform {
        SocialPlatform::new(name, None, Some("#000000")).unwrap()
    }

    #[test]
    fn test_summary_empty() {
        let summary = summarize(&[], &HashMap::new());
        assert_eq!(summary.total_posts, 0);
        assert_eq!(summary.total_likes, 0);
        assert_eq!(summary.total_comments, 0);
        assert_eq!(summary.average_likes_per_post, 0.0);
    }

    #[test]
    fn test_summary() {
        let p = PlatformId::new();
        let posts = vec![post_on(p, 15, 2024, 1, 1), post_on(p, 10, 2024, 1, 2), post_on(p, 0, 2024, 1, 3)];
        let mut comments = HashMap::new();
        comments.insert(posts[0].post_id, 2);
        comments.insert(posts[2].post_id, 1);
        // comments on someone else's post are not counted
        comments.insert(PostId::new(), 50);

        let summary = summarize(&posts, &comments);
        assert_eq!(summary.total_posts, 3);
        assert_eq!(summary.total_likes, 25);
        assert_eq!(summary.total_comments, 3);
        assert!((summary.average_likes_per_post - 25.0 / 3.0).abs() < 1e-9);

        let dist = engagement_distribution(&summary);
        assert_eq!(dist, EngagementDistribution { likes: 25, comments: 3 });
    }

    #[test]
    fn test_posts_by_platform_includes_zeros() {
        let instagram = platform("Instagram");
        let facebook = platform("Facebook");
        let x = platform("X");
        let posts = vec![
            post_on(instagram.platform_id, 0, 2024, 1, 1),
            post_on(instagram.platform_id, 0, 2024, 1, 2),
            post_on(x.platform_id, 0, 2024, 1, 3),
        ];

        let counts = posts_by_platform(&[instagram, facebook, x], &posts);
        let pairs: Vec<(&str, u64)> = counts.iter().map(|c| (c.name.as_str(), c.posts)).collect();
        assert_eq!(pairs, vec![("Instagram", 2), ("Facebook", 0), ("X", 1)]);
    }

    #[test]
    fn test_daily_activity_window() {
        let p = PlatformId::new();
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let posts = vec![
            post_on(p, 0, 2024, 3, 31),
            post_on(p, 0, 2024, 3, 31),
            post_on(p, 0, 2024, 3, 1),  // first day of the window
            post_on(p, 0, 2024, 2, 29), // one day too old
            post_on(p, 0, 2024, 4, 1),  // future
        ];

        let series = daily_activity(&posts, today, ACTIVITY_WINDOW_DAYS);
        assert_eq!(series.len(), 31);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(series[0].posts, 1);
        assert_eq!(series[30].date, today);
        assert_eq!(series[30].posts, 2);
        assert_eq!(series.iter().map(|d| d.posts).sum::<u64>(), 3);
    }

    #[test]
    fn test_daily_activity_empty_is_zero_filled() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let series = daily_activity(&[], today, ACTIVITY_WINDOW_DAYS);
        assert_eq!(series.len(), 31);
        assert!(series.iter().all(|d| d.posts == 0));
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }
}
