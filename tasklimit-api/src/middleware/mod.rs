//! Middleware modules for the API server
//!
//! - `content_type`: forces `Content-Type: application/json` on responses

pub mod content_type;
