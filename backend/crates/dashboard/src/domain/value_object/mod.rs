//! Value Object Module

pub mod content;
pub mod email;
pub mod full_name;
pub mod theme;
pub mod user_name;
pub mod user_password;
