//! Validation and routing tests
//!
//! These exercise every code path that rejects a request before touching the
//! database, so they run against a pool that never connects.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, TestContext};

#[tokio::test]
async fn malformed_json_on_users_returns_400() {
    let mut ctx = TestContext::without_database();

    let response = ctx.post_json("/users", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["message"], "Invalid request payload");
}

#[tokio::test]
async fn malformed_json_on_tasks_returns_400() {
    let mut ctx = TestContext::without_database();

    let response = ctx.post_json("/tasks", r#"["not", "an", "object"]"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid request payload");
}

#[tokio::test]
async fn missing_user_fields_return_400() {
    let mut ctx = TestContext::without_database();

    for payload in ["{}", r#"{"name":"Jane"}"#, r#"{"email":"jane@example.com"}"#] {
        let response = ctx.post_json("/users", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload: {payload}");

        let body = body_json(response).await;
        assert_eq!(body["message"], "Name and email are required");
    }
}

#[tokio::test]
async fn empty_user_fields_return_400() {
    let mut ctx = TestContext::without_database();

    let response = ctx
        .post_json("/users", r#"{"name":"","email":"jane@example.com"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Name and email are required");
}

#[tokio::test]
async fn missing_task_fields_return_400() {
    let mut ctx = TestContext::without_database();

    for payload in ["{}", r#"{"username":"jane"}"#, r#"{"username":"","task":"x"}"#] {
        let response = ctx.post_json("/tasks", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload: {payload}");

        let body = body_json(response).await;
        assert_eq!(body["message"], "Username and task are required");
    }
}

#[tokio::test]
async fn error_responses_are_json() {
    let mut ctx = TestContext::without_database();

    let response = ctx.post_json("/users", "{not json").await;
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn unknown_path_returns_404_json() {
    let mut ctx = TestContext::without_database();

    let response = ctx.request("GET", "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let mut ctx = TestContext::without_database();

    let response = ctx.request("GET", "/users").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = ctx.request("DELETE", "/tasks").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
