//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64, constant-time compare)
//! - Salted credential hashing and verification
//! - Cookie management

pub mod cookie;
pub mod credential;
pub mod crypto;
