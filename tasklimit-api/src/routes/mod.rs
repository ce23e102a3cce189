//! API route handlers
//!
//! One module per resource:
//!
//! - `health`: Health check endpoint
//! - `users`: User creation
//! - `tasks`: Quota-limited task creation

pub mod health;
pub mod tasks;
pub mod users;
