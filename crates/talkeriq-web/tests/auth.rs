//! Integration tests for the sign-in flow

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::{app_with, get, post_form, test_app};
use pretty_assertions::assert_eq;
use std::time::Duration;
use talkeriq_core::{Config, MockAuthenticator};

#[tokio::test]
async fn test_login_page_renders_without_sidebar() {
    let response = get("/login").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Welcome to TalkerIQ"));
    assert!(response.body.contains(r#"type="password""#));
    assert!(!response.body.contains("sidebar"));
}

#[tokio::test]
async fn test_show_password_toggle() {
    let response = get("/login?show_password=true").await;

    assert!(response.body.contains(r#"type="text""#));
    assert!(!response.body.contains(r#"type="password""#));
}

#[tokio::test]
async fn test_empty_password_fails_with_toast() {
    let response = post_form(test_app(), "/login", "email=jane%40example.com&password=").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.contains("Login failed"));
    assert!(response.body.contains("Please enter valid credentials."));
    assert!(response.body.contains("jane@example.com"));
}

#[tokio::test]
async fn test_missing_fields_fail() {
    let response = post_form(test_app(), "/login", "").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_complete_login_redirects_with_welcome_toast() {
    let response = post_form(
        test_app(),
        "/login",
        "email=jane%40example.com&password=hunter2",
    )
    .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location().unwrap();
    assert_eq!(location, "/dashboard?notice=signed-in");

    let dashboard = get(location).await;
    assert!(dashboard.body.contains("Login successful"));
    assert!(dashboard.body.contains("Welcome back to TalkerIQ!"));
}

#[tokio::test]
async fn test_slow_login_times_out() {
    let mut config = Config::default();
    config.auth.login_timeout_ms = 20;
    let app = app_with(config, MockAuthenticator::with_delay(Duration::from_secs(10)));

    let response = post_form(app, "/login", "email=jane%40example.com&password=hunter2").await;

    assert_eq!(response.status, StatusCode::GATEWAY_TIMEOUT);
    assert!(response.body.contains("TIMEOUT"));
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let response = post_form(test_app(), "/logout", "").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}
