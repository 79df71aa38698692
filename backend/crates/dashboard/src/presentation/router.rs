//! Dashboard Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::application::config::DashboardConfig;
use crate::application::events::AnalyticsEvents;
use crate::domain::repository::DashboardStore;
use crate::domain::services::assistant::ResponseCatalog;
use crate::infra::postgres::PgDashboardRepository;
use crate::presentation::handlers::{self, DashboardAppState};
use crate::presentation::middleware::require_session;

/// Create the Dashboard router with PostgreSQL repository
pub fn dashboard_router(
    repo: PgDashboardRepository,
    config: DashboardConfig,
    catalog: Arc<ResponseCatalog>,
) -> Router {
    dashboard_router_generic(repo, config, catalog, AnalyticsEvents::default())
}

/// Create a generic Dashboard router for any repository implementation
pub fn dashboard_router_generic<R>(
    repo: R,
    config: DashboardConfig,
    catalog: Arc<ResponseCatalog>,
    events: AnalyticsEvents,
) -> Router
where
    R: DashboardStore,
{
    let state = DashboardAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        events,
        catalog,
    };

    let public = Router::new()
        .route("/auth/signup", post(handlers::sign_up::<R>))
        .route("/auth/signin", post(handlers::sign_in::<R>))
        .route("/auth/signout", post(handlers::sign_out::<R>))
        .route("/auth/status", get(handlers::session_status::<R>));

    let protected = Router::new()
        .route(
            "/me",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .route("/platforms", get(handlers::list_platforms::<R>))
        .route("/platforms/{platform}", get(handlers::get_platform::<R>))
        .route(
            "/platforms/{platform}/posts",
            get(handlers::list_platform_posts::<R>).post(handlers::create_post::<R>),
        )
        .route("/posts", get(handlers::list_all_posts::<R>))
        .route("/posts/mine", get(handlers::list_my_posts::<R>))
        .route(
            "/posts/{post_id}",
            put(handlers::edit_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route("/posts/{post_id}/share", get(handlers::share_post::<R>))
        .route(
            "/posts/{post_id}/comments",
            get(handlers::list_comments::<R>).post(handlers::create_comment::<R>),
        )
        .route("/posts/{post_id}/like", post(handlers::toggle_like::<R>))
        .route("/posts/{post_id}/likes", get(handlers::list_likes::<R>))
        .route(
            "/comments/{comment_id}",
            put(handlers::edit_comment::<R>).delete(handlers::delete_comment::<R>),
        )
        .route("/analytics", get(handlers::analytics::<R>))
        .route("/analytics/changes", get(handlers::analytics_changes::<R>))
        .route("/assistant/query", post(handlers::assistant_query::<R>))
        .route(
            "/assistant/post-suggestion",
            get(handlers::post_suggestion::<R>),
        )
        .route(
            "/assistant/comment-suggestion",
            post(handlers::comment_suggestion::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<R>,
        ));

    public.merge(protected).with_state(state)
}
