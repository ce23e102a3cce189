//! End-to-end API tests
//!
//! These run against a real PostgreSQL database and are ignored by default.
//! Set `DATABASE_URL` and run with:
//!
//! ```bash
//! cargo test -p tasklimit-api -- --ignored
//! ```

mod common;

use axum::http::StatusCode;
use common::{body_json, unique_suffix, TestContext};
use serde_json::json;

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn create_user_persists_exactly_one_row() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = format!("jane-{}@example.com", unique_suffix());

    let response = ctx
        .post_json(
            "/users",
            &json!({"name": "Jane Doe", "email": email}).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User created successfully");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn invalid_user_payload_writes_nothing() {
    let mut ctx = TestContext::new().await.unwrap();
    let email = format!("never-{}@example.com", unique_suffix());

    let response = ctx
        .post_json("/users", &json!({"name": "", "email": email}).to_string())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn add_task_below_limit_succeeds() {
    let mut ctx = TestContext::new().await.unwrap();
    let username = provision_limit(&ctx, 3).await;

    let response = ctx
        .post_json(
            "/tasks",
            &json!({"username": username, "task": "water the plants"}).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Task added successfully");

    assert_eq!(today_count(&ctx, &username).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn add_task_at_limit_returns_conflict() {
    let mut ctx = TestContext::new().await.unwrap();
    let username = provision_limit(&ctx, 1).await;

    let payload = json!({"username": username, "task": "only task"}).to_string();

    let response = ctx.post_json("/tasks", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx.post_json("/tasks", &payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"], "conflict");
    assert_eq!(
        body["message"],
        format!("task limit reached for user {username}")
    );

    assert_eq!(today_count(&ctx, &username).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn add_task_for_unknown_user_returns_not_found() {
    let mut ctx = TestContext::new().await.unwrap();
    let username = format!("ghost-{}", unique_suffix());

    let response = ctx
        .post_json(
            "/tasks",
            &json!({"username": username, "task": "haunt"}).to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");

    assert_eq!(today_count(&ctx, &username).await, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn health_reports_connected_database() {
    let mut ctx = TestContext::new().await.unwrap();

    let response = ctx.request("GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

/// Inserts a `user_limits` row for a fresh username and returns it
async fn provision_limit(ctx: &TestContext, max_tasks: i32) -> String {
    let username = format!("api-test-{}", unique_suffix());

    sqlx::query("INSERT INTO user_limits (username, max_tasks) VALUES ($1, $2)")
        .bind(&username)
        .bind(max_tasks)
        .execute(&ctx.db)
        .await
        .unwrap();

    username
}

/// Counts today's tasks for a username, using the same server-local date the
/// handler stamps
async fn today_count(ctx: &TestContext, username: &str) -> i64 {
    let today = chrono::Local::now().date_naive();

    sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE username = $1 AND date = $2")
        .bind(username)
        .bind(today)
        .fetch_one(&ctx.db)
        .await
        .unwrap()
}
