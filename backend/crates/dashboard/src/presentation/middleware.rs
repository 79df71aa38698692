//! Session Middleware
//!
//! Middleware for requiring a signed-in user on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use uuid::Uuid;

use crate::application::CheckSessionUseCase;
use crate::domain::repository::DashboardStore;
use crate::error::DashboardError;
use crate::presentation::handlers::DashboardAppState;

/// The signed-in user, stored in request extensions by [`require_session`]
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub session_id: Uuid,
}

/// Middleware that requires a valid session cookie
pub async fn require_session<R>(
    State(state): State<DashboardAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: DashboardStore,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.get_session(&token).await,
        None => Err(DashboardError::SessionInvalid),
    };

    let session = session.map_err(|e| {
        let mut response = e.into_response();
        response
            .headers_mut()
            .insert("x-auth-required", HeaderValue::from_static("true"));
        response
    })?;

    req.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        session_id: session.session_id,
    });

    Ok(next.run(req).await)
}
