//! Application state and router builder
//!
//! Defines the shared application state and builds the Axum router with all
//! routes and middleware.
//!
//! # Example
//!
//! ```no_run
//! use tasklimit_api::{app::AppState, config::Config};
//! use sqlx::PgPool;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let pool = PgPool::connect(&config.database.url).await?;
//! let state = AppState::new(pool, config);
//! let app = tasklimit_api::app::build_router(state);
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::middleware::content_type::JsonContentTypeLayer;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool is
/// internally reference-counted and the config sits behind an Arc, so clones
/// are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /health    # Health check
/// ├── POST /users     # Create user
/// └── POST /tasks     # Record a task (quota-enforced)
/// ```
///
/// Unknown paths and wrong methods fall through to axum's built-in 404/405
/// responses.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Request logging (tower-http TraceLayer)
/// 2. JSON content-type stamping on every response
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/users", post(routes::users::create_user))
        .route("/tasks", post(routes::tasks::add_task))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(JsonContentTypeLayer)
        .with_state(state)
}
