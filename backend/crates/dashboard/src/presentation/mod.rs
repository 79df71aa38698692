//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::DashboardAppState;
pub use middleware::{CurrentUser, require_session};
pub use router::{dashboard_router, dashboard_router_generic};
