//! User creation endpoint
//!
//! # Endpoints
//!
//! - `POST /users` - Create a new user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tasklimit_shared::models::user::{CreateUser, User};
use validator::Validate;

/// Create-user request
///
/// Fields default to empty when absent so a missing field reports the same
/// "required" error as an explicitly empty one, rather than a decode error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,

    /// Email address
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
}

/// Message-only success response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "User created successfully"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: malformed JSON, or missing/empty name or email
/// - `500 Internal Server Error`: storage failure
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) =
        payload.map_err(|_| ApiError::BadRequest("Invalid request payload".to_string()))?;

    req.validate()
        .map_err(|_| ApiError::BadRequest("Name and email are required".to_string()))?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Created user");

    Ok(Json(MessageResponse {
        message: "User created successfully".to_string(),
    }))
}
