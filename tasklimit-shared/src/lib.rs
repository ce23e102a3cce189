//! # Tasklimit Shared Library
//!
//! Shared data layer for the tasklimit API server: the database pool,
//! the `users`/`tasks` models, and the daily-quota enforcement logic.
//!
//! ## Module Organization
//!
//! - `db`: PostgreSQL connection pool management
//! - `models`: Database models and data structures
//! - `quota`: Daily task quota enforcement

pub mod db;
pub mod models;
pub mod quota;

/// Current version of the tasklimit shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
