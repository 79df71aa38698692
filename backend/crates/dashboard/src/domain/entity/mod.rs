//! Entity Module

pub mod comment;
pub mod platform;
pub mod post;
pub mod session;
pub mod user;
