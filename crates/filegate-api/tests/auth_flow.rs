//! Integration tests for the credential login flow.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_issues_session_token() {
    let app = common::test_router(false);

    let response = common::request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "ann", "password": "open sesame"})),
        &[],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches('.').count(), 2);

    let claims = common::decode_session(&response.body);
    assert_eq!(claims.user.username, "ann");
    assert!(claims.user.password_hash.is_empty());
    assert!(!claims.no_auth);
    assert_eq!(claims.iss, "FileGate");
}

#[tokio::test]
async fn test_login_wrong_password_forbidden() {
    let app = common::test_router(false);

    let response = common::request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "ann", "password": "closed sesame"})),
        &[],
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_unknown_user_forbidden() {
    let app = common::test_router(false);

    let response = common::request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "mallory", "password": "open sesame"})),
        &[],
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_without_body_forbidden() {
    let app = common::test_router(false);

    let response = common::request(&app, "POST", "/api/auth/login", None, &[]).await;

    // Never 400: a malformed login is indistinguishable from bad credentials.
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_rejections_share_one_shape() {
    let app = common::test_router(false);

    let wrong = common::request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "ann", "password": "nope"})),
        &[],
    )
    .await;
    let unknown = common::request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"username": "mallory", "password": "nope"})),
        &[],
    )
    .await;
    let absent = common::request(&app, "POST", "/api/auth/login", None, &[]).await;

    assert_eq!(wrong.body, unknown.body);
    assert_eq!(unknown.body, absent.body);
}

#[tokio::test]
async fn test_login_in_no_auth_mode_issues_template_token() {
    let app = common::test_router(true);

    let response = common::request(&app, "POST", "/api/auth/login", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    let claims = common::decode_session(&response.body);
    assert_eq!(claims.user.username, "admin");
    assert!(claims.no_auth);
}

#[tokio::test]
async fn test_health_is_open() {
    let app = common::test_router(false);

    let response = common::request(&app, "GET", "/api/health", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["data"]["status"], "ok");
}
