//! Domain Services
//!
//! Pure functions with no I/O.

pub mod analytics;
pub mod assistant;
pub mod display;
