//! Database layer for tasklimit
//!
//! # Modules
//!
//! - `pool`: PostgreSQL connection pool management with health checks
//!
//! Models live in the `models` module at crate root level.

pub mod pool;
