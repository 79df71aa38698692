//! Demo Data
//!
//! Optional sample account for trying the dashboard out: user `demo`
//! with password `password`, one post per default platform and a comment.

use std::sync::Arc;

use crate::domain::entity::{comment::Comment, post::Post, user::User};
use crate::domain::repository::{
    CommentRepository, PlatformRepository, PostRepository, UserRepository,
};
use crate::domain::value_object::{
    content::{CommentContent, PostContent},
    email::Email,
    full_name::FullName,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::DashboardResult;

pub const DEMO_USER_NAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "password";

/// (platform name, content, likes)
const DEMO_POSTS: [(&str, &str, u32); 4] = [
    ("Instagram", "This is my first Instagram post! #excited", 15),
    ("Facebook", "Just joined Facebook. Connect with me!", 10),
    (
        "LinkedIn",
        "Excited to announce I have joined a new company as a software developer. #newjob #career",
        24,
    ),
    ("X", "Just posted my first tweet on X! #HelloWorld", 7),
];

const DEMO_COMMENT: &str = "This is a comment on my own post!";

pub struct SeedDemoUseCase<U, F, P, C>
where
    U: UserRepository,
    F: PlatformRepository,
    P: PostRepository,
    C: CommentRepository,
{
    user_repo: Arc<U>,
    platform_repo: Arc<F>,
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<U, F, P, C> SeedDemoUseCase<U, F, P, C>
where
    U: UserRepository,
    F: PlatformRepository,
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(user_repo: Arc<U>, platform_repo: Arc<F>, post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            platform_repo,
            post_repo,
            comment_repo,
        }
    }

    /// Create the demo account unless it already exists. Returns whether
    /// anything was created. Posts for missing platforms are skipped.
    pub async fn execute(&self) -> DashboardResult<bool> {
        let user_name = UserName::new(DEMO_USER_NAME)?;
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Ok(false);
        }

        let password = RawPassword::new(DEMO_PASSWORD.to_string())?;
        let user = User::new(
            user_name,
            FullName::new("Demo User")?,
            Email::new("demo@example.com")?,
            UserPassword::from_raw(&password),
        );
        self.user_repo.create(&user).await?;

        let mut first_post = None;
        for (platform_name, content, likes) in DEMO_POSTS {
            let Some(platform) = self.platform_repo.find_by_name(platform_name).await? else {
                tracing::warn!(platform = platform_name, "Demo platform missing, post skipped");
                continue;
            };

            let mut post = Post::new(
                platform.platform_id,
                user.user_id,
                user.user_name.clone(),
                PostContent::from_db(content),
            );
            post.likes = likes;
            self.post_repo.create(&post).await?;
            first_post.get_or_insert(post.post_id);
        }

        if let Some(post_id) = first_post {
            let comment = Comment::new(
                post_id,
                user.user_id,
                user.user_name.clone(),
                CommentContent::from_db(DEMO_COMMENT),
            );
            self.comment_repo.create(&comment).await?;
        }

        tracing::info!(user_id = %user.user_id, "Demo data created");
        Ok(true)
    }
}
