//! Integration tests for the auth flow: the login proxy, the guard on
//! protected routes, and the verify endpoint's state reporting.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    body_json, build_app, get_anon, get_authed, get_with_token, post_json_anon,
    spawn_fake_upstream, Backend, ADMIN_EMAIL, ADMIN_PASSWORD, VALID_TOKEN,
};

#[tokio::test]
async fn protected_route_rejects_missing_token() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = get_anon(app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn protected_route_rejects_bad_token() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = get_with_token(app, "/api/v1/categories", "forged-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_accepts_valid_token() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = get_authed(app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_returns_token_for_valid_credentials() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = post_json_anon(
        app,
        "/api/v1/auth/login",
        json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["token"], VALID_TOKEN);
}

#[tokio::test]
async fn login_rejects_wrong_password_uniformly() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = post_json_anon(
        app,
        "/api/v1/auth/login",
        json!({"email": ADMIN_EMAIL, "password": "wrong"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn login_rejects_malformed_email_before_calling_backend() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = post_json_anon(
        app,
        "/api/v1/auth/login",
        json!({"email": "not-an-email", "password": "whatever"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn verify_reports_authenticated_for_valid_token() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = get_authed(app, "/api/v1/auth/verify").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["state"], "authenticated");
}

#[tokio::test]
async fn verify_reports_unauthenticated_without_token() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = get_anon(app, "/api/v1/auth/verify").await;
    // Always 200: the state is the answer, not an error.
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["state"], "unauthenticated");
}

#[tokio::test]
async fn verify_reports_unauthenticated_for_rejected_token() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = get_with_token(app, "/api/v1/auth/verify", "stale-token").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["state"], "unauthenticated");
}

#[tokio::test]
async fn logout_acknowledges_with_no_content() {
    let upstream = spawn_fake_upstream(Backend::default()).await;
    let app = build_app(&upstream.base_url);

    let response = post_json_anon(app, "/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
