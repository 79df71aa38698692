//! HTTP Handlers

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Extension, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use kernel::id::{CommentId, PlatformId, PostId};

use crate::application::analytics::wait_for_change;
use crate::application::config::DashboardConfig;
use crate::application::{
    AnalyticsEvents, AnalyticsUseCase, AssistantUseCase, CheckSessionUseCase, CommentUseCase,
    LikeUseCase, PlatformUseCase, PostUseCase, PostView, ProfileUseCase, SignInInput,
    SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase, UpdateProfileInput,
};
use crate::domain::repository::DashboardStore;
use crate::domain::services::assistant::ResponseCatalog;
use crate::error::DashboardResult;
use crate::presentation::dto::{
    AnalyticsResponse, AssistantQueryRequest, AssistantQueryResponse, ChangesQuery,
    ChangesResponse, CommentResponse, CommentSuggestionRequest, CommentSuggestionResponse,
    ContentRequest, LikeResponse, LikersResponse, PlatformResponse, PostResponse,
    ProfileResponse, SessionStatusResponse, ShareResponse, SignInRequest, SignInResponse,
    SignUpRequest, SignUpResponse, SuggestionResponse, UpdateProfileRequest,
};
use crate::presentation::extract::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::middleware::CurrentUser;

/// Shared state for dashboard handlers
#[derive(Clone)]
pub struct DashboardAppState<R>
where
    R: DashboardStore,
{
    pub repo: Arc<R>,
    pub config: Arc<DashboardConfig>,
    pub events: AnalyticsEvents,
    pub catalog: Arc<ResponseCatalog>,
}

impl<R: DashboardStore> DashboardAppState<R> {
    fn posts(&self) -> PostUseCase<R, R, R, R> {
        PostUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.repo.clone(),
            self.repo.clone(),
            self.config.clone(),
            self.events.clone(),
        )
    }

    fn comments(&self) -> CommentUseCase<R, R> {
        CommentUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.config.clone(),
            self.events.clone(),
        )
    }

    fn likes(&self) -> LikeUseCase<R, R> {
        LikeUseCase::new(self.repo.clone(), self.repo.clone(), self.events.clone())
    }
}

// ============================================================================
// Sign Up / Sign In / Sign Out
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiJson(req): ApiJson<SignUpRequest>,
) -> DashboardResult<(StatusCode, Json<SignUpResponse>)> {
    let use_case = SignUpUseCase::new(state.repo.clone());

    let output = use_case
        .execute(SignUpInput {
            user_name: req.user_name,
            full_name: req.full_name,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            user_id: output.user_id.to_string(),
            user_name: output.user_name.to_string(),
        }),
    ))
}

/// POST /api/auth/signin
pub async fn sign_in<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiJson(req): ApiJson<SignInRequest>,
) -> DashboardResult<impl IntoResponse> {
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            user_name: req.user_name,
            password: req.password,
            remember_me: req.remember_me,
        })
        .await?;

    // Max-Age must match remember_me
    let cookie = platform::cookie::set_cookie_header(
        &state.config.session_cookie(output.remember_me),
        &output.session_token,
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            user_id: output.user_id.to_string(),
            user_name: output.user_name.to_string(),
            expires_at_ms: output.expires_at_ms,
        }),
    ))
}

/// POST /api/auth/signout
pub async fn sign_out<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        if let Err(e) = use_case.execute(&token).await {
            tracing::debug!(error = %e, "Sign out with unusable session");
        }
    }

    let cookie = platform::cookie::delete_cookie_header(&state.config.base_cookie());

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

/// GET /api/auth/status
pub async fn session_status<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse> {
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.get_session(&token).await.ok(),
        None => None,
    };

    Json(match session {
        Some(session) => SessionStatusResponse {
            authenticated: true,
            user_id: Some(session.user_id.to_string()),
            remember_me: Some(session.remember_me),
            expires_at_ms: Some(session.expires_at_ms),
        },
        None => SessionStatusResponse {
            authenticated: false,
            user_id: None,
            remember_me: None,
            expires_at_ms: None,
        },
    })
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/me
pub async fn get_profile<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> DashboardResult<Json<ProfileResponse>> {
    let user = ProfileUseCase::new(state.repo.clone())
        .get(&current.user_id)
        .await?;

    Ok(Json(ProfileResponse::from(&user)))
}

/// PUT /api/me
pub async fn update_profile<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> DashboardResult<Json<ProfileResponse>> {
    let user = ProfileUseCase::new(state.repo.clone())
        .update(
            &current.user_id,
            UpdateProfileInput {
                full_name: req.full_name,
                email: req.email,
                theme: req.theme,
            },
        )
        .await?;

    Ok(Json(ProfileResponse::from(&user)))
}

// ============================================================================
// Platforms
// ============================================================================

/// GET /api/platforms
pub async fn list_platforms<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
) -> DashboardResult<Json<Vec<PlatformResponse>>> {
    let platforms = PlatformUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(platforms.into_iter().map(PlatformResponse::from).collect()))
}

/// GET /api/platforms/{name}
pub async fn get_platform<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiPath(name): ApiPath<String>,
) -> DashboardResult<Json<PlatformResponse>> {
    let platform = PlatformUseCase::new(state.repo.clone())
        .get_by_name(&name)
        .await?;
    Ok(Json(PlatformResponse::from(platform)))
}

// ============================================================================
// Posts
// ============================================================================

/// GET /api/platforms/{id}/posts
pub async fn list_platform_posts<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(platform_id): ApiPath<PlatformId>,
) -> DashboardResult<Json<Vec<PostResponse>>> {
    let views = state
        .posts()
        .list_for_platform(&current.user_id, &platform_id)
        .await?;
    Ok(Json(post_responses(views)))
}

/// POST /api/platforms/{id}/posts
pub async fn create_post<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(platform_id): ApiPath<PlatformId>,
    ApiJson(req): ApiJson<ContentRequest>,
) -> DashboardResult<(StatusCode, Json<PostResponse>)> {
    let author = ProfileUseCase::new(state.repo.clone())
        .get(&current.user_id)
        .await?;

    let post = state
        .posts()
        .create(&author, &platform_id, &req.content)
        .await?;

    let view = PostView {
        post,
        comment_count: 0,
        liked_by_viewer: false,
    };
    Ok((
        StatusCode::CREATED,
        Json(PostResponse::from_view(view, Utc::now())),
    ))
}

/// GET /api/posts
pub async fn list_all_posts<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> DashboardResult<Json<Vec<PostResponse>>> {
    let views = state.posts().list_all(&current.user_id).await?;
    Ok(Json(post_responses(views)))
}

/// GET /api/posts/mine
pub async fn list_my_posts<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> DashboardResult<Json<Vec<PostResponse>>> {
    let views = state.posts().list_for_user(&current.user_id).await?;
    Ok(Json(post_responses(views)))
}

/// PUT /api/posts/{id}
pub async fn edit_post<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<PostId>,
    ApiJson(req): ApiJson<ContentRequest>,
) -> DashboardResult<Json<PostResponse>> {
    let post = state
        .posts()
        .edit(&current.user_id, &post_id, &req.content)
        .await?;

    let view = PostView {
        comment_count: state.comments().count(&post_id).await?,
        liked_by_viewer: state.likes().has_liked(&current.user_id, &post_id).await?,
        post,
    };
    Ok(Json(PostResponse::from_view(view, Utc::now())))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<PostId>,
) -> DashboardResult<StatusCode> {
    state.posts().delete(&current.user_id, &post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/posts/{id}/share
pub async fn share_post<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiPath(post_id): ApiPath<PostId>,
) -> DashboardResult<Json<ShareResponse>> {
    let text = state.posts().share_text(&post_id).await?;
    Ok(Json(ShareResponse { text }))
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/posts/{id}/comments
pub async fn list_comments<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiPath(post_id): ApiPath<PostId>,
) -> DashboardResult<Json<Vec<CommentResponse>>> {
    let comments = state.comments().list_for_post(&post_id).await?;
    let now = Utc::now();
    Ok(Json(
        comments
            .into_iter()
            .map(|c| CommentResponse::from_comment(c, now))
            .collect(),
    ))
}

/// POST /api/posts/{id}/comments
pub async fn create_comment<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<PostId>,
    ApiJson(req): ApiJson<ContentRequest>,
) -> DashboardResult<(StatusCode, Json<CommentResponse>)> {
    let author = ProfileUseCase::new(state.repo.clone())
        .get(&current.user_id)
        .await?;

    let comment = state
        .comments()
        .create(&author, &post_id, &req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse::from_comment(comment, Utc::now())),
    ))
}

/// PUT /api/comments/{id}
pub async fn edit_comment<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(comment_id): ApiPath<CommentId>,
    ApiJson(req): ApiJson<ContentRequest>,
) -> DashboardResult<Json<CommentResponse>> {
    let comment = state
        .comments()
        .edit(&current.user_id, &comment_id, &req.content)
        .await?;
    Ok(Json(CommentResponse::from_comment(comment, Utc::now())))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(comment_id): ApiPath<CommentId>,
) -> DashboardResult<StatusCode> {
    state
        .comments()
        .delete(&current.user_id, &comment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Likes
// ============================================================================

/// POST /api/posts/{id}/like
pub async fn toggle_like<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<PostId>,
) -> DashboardResult<Json<LikeResponse>> {
    let output = state.likes().toggle(&current.user_id, &post_id).await?;
    Ok(Json(LikeResponse::from(output)))
}

/// GET /api/posts/{id}/likes
pub async fn list_likes<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<PostId>,
) -> DashboardResult<Json<LikersResponse>> {
    let likes = state.likes();
    let user_names = likes.likers(&post_id).await?;

    Ok(Json(LikersResponse {
        likes: likes.count(&post_id).await?,
        liked_by_me: likes.has_liked(&current.user_id, &post_id).await?,
        user_names: user_names.into_iter().map(|n| n.into_string()).collect(),
    }))
}

// ============================================================================
// Analytics
// ============================================================================

/// GET /api/analytics
pub async fn analytics<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> DashboardResult<Json<AnalyticsResponse>> {
    let use_case = AnalyticsUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let report = use_case
        .report(&current.user_id, Utc::now().date_naive())
        .await?;
    Ok(Json(AnalyticsResponse::from(report)))
}

/// GET /api/analytics/changes?timeoutMs=
///
/// Long-poll: answers as soon as one of the caller's analytics inputs
/// changes, or with `changed: false` once the timeout passes.
pub async fn analytics_changes<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    ApiQuery(query): ApiQuery<ChangesQuery>,
) -> Json<ChangesResponse> {
    let changed = wait_for_change(
        &state.events,
        &state.config,
        current.user_id,
        query.timeout_ms.map(Duration::from_millis),
    )
    .await;

    Json(ChangesResponse { changed })
}

// ============================================================================
// Assistant
// ============================================================================

/// POST /api/assistant/query
pub async fn assistant_query<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiJson(req): ApiJson<AssistantQueryRequest>,
) -> Json<AssistantQueryResponse> {
    let reply = AssistantUseCase::new(state.catalog.clone()).respond(&req.query);
    Json(AssistantQueryResponse::from(reply))
}

/// GET /api/assistant/post-suggestion
pub async fn post_suggestion<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
) -> Json<SuggestionResponse> {
    let text = AssistantUseCase::new(state.catalog.clone()).post_suggestion();
    Json(SuggestionResponse { text })
}

/// POST /api/assistant/comment-suggestion
pub async fn comment_suggestion<R: DashboardStore>(
    State(state): State<DashboardAppState<R>>,
    ApiJson(req): ApiJson<CommentSuggestionRequest>,
) -> Json<CommentSuggestionResponse> {
    let (sentiment, text) = AssistantUseCase::new(state.catalog.clone())
        .comment_suggestion(req.post_content.as_deref());
    Json(CommentSuggestionResponse { sentiment, text })
}

// ============================================================================
// Helper Functions
// ============================================================================

fn post_responses(views: Vec<PostView>) -> Vec<PostResponse> {
    let now = Utc::now();
    views
        .into_iter()
        .map(|view| PostResponse::from_view(view, now))
        .collect()
}
