//! Domain Layer
//!
//! Contains entities, value objects, repository traits and pure services.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    comment::Comment, platform::SocialPlatform, post::Post, session::Session, user::User,
};
pub use repository::{
    CommentRepository, DashboardStore, LikeRepository, PlatformRepository, PostRepository,
    SessionRepository, UserRepository,
};
