//! PostgreSQL Repository Implementations

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PlatformId, PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    comment::Comment, platform::SocialPlatform, post::Post, session::Session, user::User,
};
use crate::domain::repository::{
    CommentRepository, LikeRepository, PlatformRepository, PostRepository, SessionRepository,
    UserRepository,
};
use crate::domain::value_object::{
    content::{CommentContent, PostContent},
    email::Email,
    full_name::FullName,
    theme::ThemePreference,
    user_name::UserName,
    user_password::UserPassword,
};
use crate::error::{DashboardError, DashboardResult};

/// PostgreSQL-backed dashboard repository
#[derive(Clone)]
pub struct PgDashboardRepository {
    pool: PgPool,
}

impl PgDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> DashboardResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

fn uuids<T>(ids: &[kernel::id::Id<T>]) -> Vec<Uuid> {
    ids.iter().map(|id| id.into_uuid()).collect()
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgDashboardRepository {
    async fn create(&self, user: &User) -> DashboardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                full_name,
                email,
                password_hash,
                theme_preference,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.full_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_str())
        .bind(user.theme.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DashboardError::UserNameTaken,
            _ => DashboardError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> DashboardResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                full_name,
                email,
                password_hash,
                theme_preference,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> DashboardResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                full_name,
                email,
                password_hash,
                theme_preference,
                created_at,
                updated_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> DashboardResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1)",
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> DashboardResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = $2,
                email = $3,
                theme_preference = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.full_name.as_str())
        .bind(user.email.as_str())
        .bind(user.theme.as_str())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Platform Repository Implementation
// ============================================================================

impl PlatformRepository for PgDashboardRepository {
    async fn create(&self, platform: &SocialPlatform) -> DashboardResult<()> {
        sqlx::query(
            "INSERT INTO social_media_platforms (platform_id, name, icon, color) VALUES ($1, $2, $3, $4)",
        )
        .bind(platform.platform_id.as_uuid())
        .bind(&platform.name)
        .bind(&platform.icon)
        .bind(&platform.color)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, platform_id: &PlatformId) -> DashboardResult<Option<SocialPlatform>> {
        let row = sqlx::query_as::<_, PlatformRow>(
            "SELECT platform_id, name, icon, color FROM social_media_platforms WHERE platform_id = $1",
        )
        .bind(platform_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlatformRow::into_platform))
    }

    async fn find_by_name(&self, name: &str) -> DashboardResult<Option<SocialPlatform>> {
        let row = sqlx::query_as::<_, PlatformRow>(
            "SELECT platform_id, name, icon, color FROM social_media_platforms WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlatformRow::into_platform))
    }

    async fn list(&self) -> DashboardResult<Vec<SocialPlatform>> {
        let rows = sqlx::query_as::<_, PlatformRow>(
            "SELECT platform_id, name, icon, color FROM social_media_platforms ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlatformRow::into_platform).collect())
    }

    async fn update(&self, platform: &SocialPlatform) -> DashboardResult<()> {
        sqlx::query(
            "UPDATE social_media_platforms SET name = $2, icon = $3, color = $4 WHERE platform_id = $1",
        )
        .bind(platform.platform_id.as_uuid())
        .bind(&platform.name)
        .bind(&platform.icon)
        .bind(&platform.color)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, platform_id: &PlatformId) -> DashboardResult<bool> {
        let deleted = sqlx::query("DELETE FROM social_media_platforms WHERE platform_id = $1")
            .bind(platform_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count(&self) -> DashboardResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM social_media_platforms")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgDashboardRepository {
    async fn create(&self, post: &Post) -> DashboardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                platform_id,
                user_id,
                user_name,
                content,
                posted_at,
                likes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.platform_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(post.user_name.as_str())
        .bind(post.content.as_str())
        .bind(post.posted_at)
        .bind(i32::try_from(post.likes).unwrap_or(i32::MAX))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> DashboardResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, platform_id, user_id, user_name, content, posted_at, likes
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list_by_platform(&self, platform_id: &PlatformId) -> DashboardResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, platform_id, user_id, user_name, content, posted_at, likes
            FROM posts
            WHERE platform_id = $1
            ORDER BY posted_at DESC
            "#,
        )
        .bind(platform_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> DashboardResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, platform_id, user_id, user_name, content, posted_at, likes
            FROM posts
            WHERE user_id = $1
            ORDER BY posted_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn list_all(&self) -> DashboardResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, platform_id, user_id, user_name, content, posted_at, likes
            FROM posts
            ORDER BY posted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, post: &Post) -> DashboardResult<()> {
        sqlx::query("UPDATE posts SET content = $2 WHERE post_id = $1")
            .bind(post.post_id.as_uuid())
            .bind(post.content.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn set_like_count(&self, post_id: &PostId, likes: u32) -> DashboardResult<()> {
        sqlx::query("UPDATE posts SET likes = $2 WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .bind(i32::try_from(likes).unwrap_or(i32::MAX))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> DashboardResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgDashboardRepository {
    async fn create(&self, comment: &Comment) -> DashboardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                user_id,
                user_name,
                content,
                commented_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.user_id.as_uuid())
        .bind(comment.user_name.as_str())
        .bind(comment.content.as_str())
        .bind(comment.commented_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> DashboardResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, post_id, user_id, user_name, content, commented_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn list_by_post(&self, post_id: &PostId) -> DashboardResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, post_id, user_id, user_name, content, commented_at
            FROM comments
            WHERE post_id = $1
            ORDER BY commented_at ASC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> DashboardResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, post_id, user_id, user_name, content, commented_at
            FROM comments
            WHERE user_id = $1
            ORDER BY commented_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn update(&self, comment: &Comment) -> DashboardResult<()> {
        sqlx::query("UPDATE comments SET content = $2 WHERE comment_id = $1")
            .bind(comment.comment_id.as_uuid())
            .bind(comment.content.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, comment_id: &CommentId) -> DashboardResult<bool> {
        let deleted = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count_for_post(&self, post_id: &PostId) -> DashboardResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn count_for_posts(&self, post_ids: &[PostId]) -> DashboardResult<HashMap<PostId, u64>> {
        let rows = sqlx::query_as::<_, (Uuid, i64)>(
            r#"
            SELECT post_id, COUNT(*)
            FROM comments
            WHERE post_id = ANY($1)
            GROUP BY post_id
            "#,
        )
        .bind(uuids(post_ids))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(post_id, count)| (PostId::from_uuid(post_id), count.max(0) as u64))
            .collect())
    }
}

// ============================================================================
// Like Repository Implementation
// ============================================================================

impl LikeRepository for PgDashboardRepository {
    async fn has_liked(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND post_id = $2)",
        )
        .bind(user_id.as_uuid())
        .bind(post_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn toggle(&self, user_id: &UserId, post_id: &PostId) -> DashboardResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Serializes toggles on the same post until commit
        sqlx::query("SELECT 1 FROM posts WHERE post_id = $1 FOR UPDATE")
            .bind(post_id.as_uuid())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(DashboardError::NotFound("Post"))?;

        let removed = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id.as_uuid())
            .bind(post_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            sqlx::query("INSERT INTO likes (user_id, post_id, created_at) VALUES ($1, $2, $3)")
                .bind(user_id.as_uuid())
                .bind(post_id.as_uuid())
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(removed == 0)
    }

    async fn count_for_post(&self, post_id: &PostId) -> DashboardResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn users_who_liked(&self, post_id: &PostId) -> DashboardResult<Vec<UserName>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT u.user_name
            FROM likes l
            JOIN users u ON u.user_id = l.user_id
            WHERE l.post_id = $1
            ORDER BY l.created_at ASC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(names.into_iter().map(UserName::from_db).collect())
    }

    async fn liked_among(
        &self,
        user_id: &UserId,
        post_ids: &[PostId],
    ) -> DashboardResult<HashSet<PostId>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT post_id FROM likes WHERE user_id = $1 AND post_id = ANY($2)",
        )
        .bind(user_id.as_uuid())
        .bind(uuids(post_ids))
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(PostId::from_uuid).collect())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgDashboardRepository {
    async fn create(&self, session: &Session) -> DashboardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                remember_me,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(session.remember_me)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> DashboardResult<Option<Session>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT session_id, user_id, remember_me, expires_at_ms, created_at
            FROM auth_sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn delete(&self, session_id: Uuid) -> DashboardResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> DashboardResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: String,
    full_name: String,
    email: String,
    password_hash: String,
    theme_preference: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.user_name),
            full_name: FullName::from_db(self.full_name),
            email: Email::from_db(self.email),
            password: UserPassword::from_db(self.password_hash),
            theme: ThemePreference::parse(&self.theme_preference),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PlatformRow {
    platform_id: Uuid,
    name: String,
    icon: Option<String>,
    color: Option<String>,
}

impl PlatformRow {
    fn into_platform(self) -> SocialPlatform {
        SocialPlatform {
            platform_id: PlatformId::from_uuid(self.platform_id),
            name: self.name,
            icon: self.icon,
            color: self.color,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    platform_id: Uuid,
    user_id: Uuid,
    user_name: String,
    content: String,
    posted_at: DateTime<Utc>,
    likes: i32,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            platform_id: PlatformId::from_uuid(self.platform_id),
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.user_name),
            content: PostContent::from_db(self.content),
            posted_at: self.posted_at,
            likes: u32::try_from(self.likes).unwrap_or(0),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    user_name: String,
    content: String,
    commented_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            user_name: UserName::from_db(self.user_name),
            content: CommentContent::from_db(self.content),
            commented_at: self.commented_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    remember_me: bool,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            remember_me: self.remember_me,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
