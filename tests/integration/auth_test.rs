//! Integration tests for registration, login and the authentication gate.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use delamere_auth::jwt::JwtEncoder;
use delamere_entity::user::UserRole;

use crate::helpers::{self, ADMIN_EMAIL, PASSWORD, TestApp};

#[tokio::test]
async fn test_register_then_login_returns_stored_role() {
    let app = TestApp::new();
    let mut body = helpers::registration_body("a@x.com");
    body["role"] = json!("seller");

    let response = app
        .request("POST", "/api/auth/register", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully");
    assert_eq!(response.body["user"]["role"], "seller");
    assert!(response.body["user"].get("passwordHash").is_none());

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["user"]["role"], "seller");

    let token = login.body["token"].as_str().unwrap();
    let me = app.request("GET", "/api/auth/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "a@x.com");
    assert_eq!(me.body["role"], "seller");
}

#[tokio::test]
async fn test_register_defaults_to_buyer() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(helpers::registration_body("plain@x.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "buyer");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.register("dup@x.com", None).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(helpers::registration_body("dup@x.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_admits_one() {
    let app = TestApp::new();

    let attempts = (0..8).map(|_| {
        app.request(
            "POST",
            "/api/auth/register",
            Some(helpers::registration_body("race@x.com")),
            None,
        )
    });
    let responses = futures::future::join_all(attempts).await;

    let created = responses
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    let conflicts = responses
        .iter()
        .filter(|r| r.status == StatusCode::CONFLICT)
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(app.stores.users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_client_cannot_claim_admin() {
    let app = TestApp::new();
    let mut body = helpers::registration_body("sneaky@x.com");
    body["role"] = json!("admin");

    let response = app
        .request("POST", "/api/auth/register", Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(app.stores.users.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shipped_config_grants_no_admin() {
    let app = TestApp::with_config(helpers::shipped_config());
    assert!(app.config.auth.admin_emails.is_empty());

    for email in [ADMIN_EMAIL.to_uppercase(), ADMIN_EMAIL.to_string()] {
        let mut body = helpers::registration_body(&email);
        body["role"] = json!("admin");
        let response = app
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{email}");
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }

    let (_, token) = app.register(&ADMIN_EMAIL.to_uppercase(), None).await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.body["role"], "buyer");

    let admin_only = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;
    assert_eq!(admin_only.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_allow_listed_email_becomes_admin() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(helpers::registration_body(&ADMIN_EMAIL.to_uppercase())),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_register_validation_failures() {
    let app = TestApp::new();

    let mut short_password = helpers::registration_body("short@x.com");
    short_password["password"] = json!("abc");
    let mut bad_county = helpers::registration_body("county@x.com");
    bad_county["county"] = json!("Atlantis");
    let mut bad_email = helpers::registration_body("x");
    bad_email["email"] = json!("not-an-email");
    let mut short_phone = helpers::registration_body("phone@x.com");
    short_phone["phoneNumber"] = json!("0712");

    for body in [short_password, bad_county, bad_email, short_phone] {
        let response = app
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::new();
    let response = app
        .raw_request("POST", "/api/auth/register", "{not json".to_string(), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("known@x.com", None).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "known@x.com", "password": "wrong-one" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ghost@x.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.error_code(), "UNAUTHENTICATED");

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected_like_malformed() {
    let app = TestApp::new();
    let (id, _) = app.register("old@x.com", None).await;

    let encoder = JwtEncoder::new(&app.config.auth).unwrap();
    let stale = encoder
        .issue_at(id, UserRole::Buyer, Utc::now() - Duration::hours(25))
        .unwrap();

    let expired = app.request("GET", "/api/auth/me", None, Some(&stale)).await;
    let malformed = app
        .request("GET", "/api/auth/me", None, Some("abc.def.ghi"))
        .await;

    assert_eq!(expired.status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired.error_code(), malformed.error_code());
}

#[tokio::test]
async fn test_update_profile_sets_whatsapp() {
    let app = TestApp::new();
    let (_, token) = app.register("wa@x.com", None).await;

    let response = app
        .request(
            "PUT",
            "/api/auth/profile",
            Some(json!({ "whatsappNumber": "254712345678" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["whatsappNumber"], "254712345678");

    let empty = app
        .request(
            "PUT",
            "/api/auth/profile",
            Some(json!({ "whatsappNumber": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/nowhere", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}
