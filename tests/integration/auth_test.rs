//! Integration tests for identity resolution against a live router.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use promohub_auth::JwtEncoder;
use promohub_core::types::UserId;

#[tokio::test]
async fn test_missing_token_is_unauthenticated() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let response = app.query("campaign.list", "", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "someone-elses-secret".to_string();
    let token = JwtEncoder::new(&foreign)
        .issue(UserId::new_v4(), None, 10)
        .expect("issue")
        .token;

    let response = app.query("dashboard.summary", "", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let mut config = app.config.auth.clone();
    config.leeway_seconds = 0;
    let token = JwtEncoder::new(&config)
        .issue(UserId::new_v4(), None, -10)
        .expect("issue")
        .token;

    let response = app.query("campaign.list", "", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_token_identifies_caller() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let campaign = app.create_campaign(&token, "Via cookie").await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/rpc/campaign.byId?id={campaign}"))
        .header(header::COOKIE, format!("theme=dark; {}={token}", helpers::TOKEN_COOKIE))
        .body(Body::empty())
        .expect("request");
    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["title"], "Via cookie");
}

#[tokio::test]
async fn test_readiness_reports_connected_database() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let request = Request::builder()
        .uri("/api/health/ready")
        .body(Body::empty())
        .expect("request");
    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["database"], "connected");
}
