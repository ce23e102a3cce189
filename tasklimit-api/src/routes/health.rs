//! Health check endpoint
//!
//! # Endpoint
//!
//! ```text
//! GET /health
//! ```
//!
//! # Response
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "database": "connected"
//! }
//! ```

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,
}

/// Health check handler
///
/// Always answers 200; a failing database check is reported in the body so
/// the endpoint stays usable as a liveness probe even when Postgres is down.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match tasklimit_shared::db::pool::health_check(&state.db).await {
        Ok(()) => "connected".to_string(),
        Err(err) => {
            tracing::warn!("Database health check failed: {}", err);
            "unavailable".to_string()
        }
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
