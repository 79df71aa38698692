//! Application Layer
//!
//! Use cases and application services.

pub mod analytics;
pub mod assistant;
pub mod check_session;
pub mod comments;
pub mod config;
pub mod events;
pub mod likes;
pub mod platforms;
pub mod posts;
pub mod profile;
pub mod seed;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use analytics::{AnalyticsReport, AnalyticsUseCase};
pub use assistant::AssistantUseCase;
pub use check_session::CheckSessionUseCase;
pub use comments::CommentUseCase;
pub use config::DashboardConfig;
pub use events::{AnalyticsEvents, AnalyticsUpdated};
pub use likes::{LikeToggleOutput, LikeUseCase};
pub use platforms::PlatformUseCase;
pub use posts::{PostUseCase, PostView};
pub use profile::{ProfileUseCase, UpdateProfileInput};
pub use seed::SeedDemoUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
