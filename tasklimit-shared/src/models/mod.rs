//! Database models
//!
//! One module per table:
//!
//! - `user`: user accounts (`users`)
//! - `task`: per-day task records (`tasks`)
//! - `user_limit`: per-user daily task quotas (`user_limits`, externally
//!   provisioned)

pub mod task;
pub mod user;
pub mod user_limit;
