//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{AnalyticsReport, LikeToggleOutput, PostView};
use crate::domain::entity::{comment::Comment, platform::SocialPlatform, user::User};
use crate::domain::services::analytics::{
    DailyActivity, EngagementDistribution, EngagementSummary, PlatformPostCount,
};
use crate::domain::services::assistant::{AssistantReply, QueryTopic, Sentiment};
use crate::domain::services::display;
use crate::domain::value_object::theme::{ThemePalette, ThemePreference};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_id: String,
    pub user_name: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user_id: String,
    pub user_name: String,
    pub expires_at_ms: i64,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub remember_me: Option<bool>,
    pub expires_at_ms: Option<i64>,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub theme: ThemePreference,
    pub palette: &'static ThemePalette,
    pub member_since: String,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            user_name: user.user_name.to_string(),
            full_name: user.full_name.as_str().to_string(),
            email: user.email.to_string(),
            theme: user.theme,
            palette: user.theme.palette(),
            member_since: display::format_date(user.created_at),
        }
    }
}

/// Profile update request; omitting `theme` keeps the current one
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub email: String,
    pub theme: Option<String>,
}

// ============================================================================
// Platforms
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformResponse {
    pub platform_id: String,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl From<SocialPlatform> for PlatformResponse {
    fn from(platform: SocialPlatform) -> Self {
        Self {
            platform_id: platform.platform_id.to_string(),
            name: platform.name,
            icon: platform.icon,
            color: platform.color,
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: String,
    pub platform_id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub posted_at: DateTime<Utc>,
    pub posted_at_display: String,
    pub time_ago: String,
    pub likes: u32,
    pub comment_count: u64,
    pub liked_by_me: bool,
}

impl PostResponse {
    pub fn from_view(view: PostView, now: DateTime<Utc>) -> Self {
        let post = view.post;
        Self {
            post_id: post.post_id.to_string(),
            platform_id: post.platform_id.to_string(),
            user_id: post.user_id.to_string(),
            user_name: post.user_name.to_string(),
            content: post.content.as_str().to_string(),
            posted_at: post.posted_at,
            posted_at_display: display::format_date_time(post.posted_at),
            time_ago: display::time_ago(post.posted_at, now),
            likes: post.likes,
            comment_count: view.comment_count,
            liked_by_me: view.liked_by_viewer,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareResponse {
    pub text: String,
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub commented_at: DateTime<Utc>,
    pub time_ago: String,
}

impl CommentResponse {
    pub fn from_comment(comment: Comment, now: DateTime<Utc>) -> Self {
        Self {
            comment_id: comment.comment_id.to_string(),
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.to_string(),
            user_name: comment.user_name.to_string(),
            content: comment.content.as_str().to_string(),
            commented_at: comment.commented_at,
            time_ago: display::time_ago(comment.commented_at, now),
        }
    }
}

// ============================================================================
// Likes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes: u64,
}

impl From<LikeToggleOutput> for LikeResponse {
    fn from(output: LikeToggleOutput) -> Self {
        Self {
            liked: output.liked,
            likes: output.likes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikersResponse {
    pub likes: u64,
    pub liked_by_me: bool,
    pub user_names: Vec<String>,
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub summary: EngagementSummary,
    pub posts_by_platform: Vec<PlatformPostCount>,
    pub engagement: EngagementDistribution,
    pub activity: Vec<DailyActivity>,
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        Self {
            summary: report.summary,
            posts_by_platform: report.posts_by_platform,
            engagement: report.engagement,
            activity: report.activity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesQuery {
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangesResponse {
    pub changed: bool,
}

// ============================================================================
// Assistant
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantQueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantQueryResponse {
    pub topic: QueryTopic,
    pub text: String,
}

impl From<AssistantReply> for AssistantQueryResponse {
    fn from(reply: AssistantReply) -> Self {
        Self {
            topic: reply.topic,
            text: reply.text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub text: String,
}

/// Comment suggestion request; with no post content a generic suggestion
/// is returned
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSuggestionRequest {
    pub post_content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentSuggestionResponse {
    pub sentiment: Sentiment,
    pub text: String,
}
