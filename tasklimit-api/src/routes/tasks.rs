//! Task creation endpoint
//!
//! # Endpoints
//!
//! - `POST /tasks` - Record a task for today, subject to the user's daily
//!   quota

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::users::MessageResponse,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tasklimit_shared::quota::TaskQuota;
use validator::Validate;

/// Add-task request
///
/// The task date is never client-supplied; the handler stamps the server's
/// current local date.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTaskRequest {
    /// Username to record the task for
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,

    /// Task description
    #[serde(default)]
    #[validate(length(min = 1))]
    pub task: String,
}

/// Record a task for today
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// {
///   "username": "jane",
///   "task": "water the plants"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Task added successfully"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: malformed JSON, or missing/empty username or task
/// - `404 Not Found`: no quota configured for the username
/// - `409 Conflict`: the user's daily task limit is reached
/// - `500 Internal Server Error`: storage failure
pub async fn add_task(
    State(state): State<AppState>,
    payload: Result<Json<AddTaskRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) =
        payload.map_err(|_| ApiError::BadRequest("Invalid request payload".to_string()))?;

    req.validate()
        .map_err(|_| ApiError::BadRequest("Username and task are required".to_string()))?;

    let today = Local::now().date_naive();

    let quota = TaskQuota::new(state.db.clone());
    let task = quota.add_task(&req.username, &req.task, today).await?;

    tracing::info!(task_id = task.id, username = %task.username, "Added task");

    Ok(Json(MessageResponse {
        message: "Task added successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: AddTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.task.is_empty());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        let req: AddTaskRequest =
            serde_json::from_str(r#"{"username":"jane","task":"water the plants"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // A client-supplied date is ignored, never trusted.
        let req: AddTaskRequest = serde_json::from_str(
            r#"{"username":"jane","task":"x","date":"1999-01-01"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }
}
