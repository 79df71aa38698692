//! Dashboard Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, pure services
//! - `application/` - Use cases, configuration, change notifications
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign up / sign in with user name + password, server-side sessions
//! - Social platforms with posts, comments and likes
//! - Per-user engagement analytics with long-poll change notification
//! - Keyword assistant for post and comment suggestions
//!
//! ## Security Model
//! - Passwords stored as salted SHA-256 records (`platform::credential`)
//! - Session cookies carry an HMAC-signed session id
//! - Posts and comments can only be changed by their author

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::DashboardConfig;
pub use application::events::AnalyticsEvents;
pub use domain::services::assistant::ResponseCatalog;
pub use error::{DashboardError, DashboardResult};
pub use infra::postgres::PgDashboardRepository;
pub use presentation::router::{dashboard_router, dashboard_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgDashboardRepository as DashboardStoreImpl;
}
