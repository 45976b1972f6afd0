//! Integration tests for the admin endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{ADMIN_EMAIL, TestApp};

#[tokio::test]
async fn test_admin_collections() {
    let app = TestApp::new();
    let (_, admin) = app.register(ADMIN_EMAIL, None).await;
    let (_, seller) = app.register("seller@x.com", Some("seller")).await;
    let (_, buyer) = app.register("buyer@x.com", None).await;
    let listing = app.create_listing(&seller, "Cow").await;
    app.request(
        "POST",
        "/api/orders",
        Some(json!({ "livestockId": listing })),
        Some(&buyer),
    )
    .await;

    let users = app.request("GET", "/api/admin/users", None, Some(&admin)).await;
    assert_eq!(users.status, StatusCode::OK);
    let users = users.body.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));

    let listings = app
        .request("GET", "/api/admin/livestock", None, Some(&admin))
        .await;
    assert_eq!(listings.status, StatusCode::OK);
    assert_eq!(listings.body.as_array().unwrap().len(), 1);

    let orders = app
        .request("GET", "/api/admin/orders", None, Some(&admin))
        .await;
    assert_eq!(orders.status, StatusCode::OK);
    assert_eq!(orders.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_non_admins_are_forbidden() {
    let app = TestApp::new();
    let (seller_id, seller) = app.register("seller@x.com", Some("seller")).await;
    let (buyer_id, buyer) = app.register("buyer@x.com", None).await;

    for path in ["/api/admin/users", "/api/admin/livestock", "/api/admin/orders"] {
        for token in [&seller, &buyer] {
            let response = app.request("GET", path, None, Some(token)).await;
            assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        }
        let anonymous = app.request("GET", path, None, None).await;
        assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED, "{path}");
    }

    for (token, target) in [(&seller, buyer_id), (&buyer, seller_id), (&buyer, buyer_id)] {
        let path = format!("/api/admin/users/{target}");
        let response = app.request("DELETE", &path, None, Some(token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(response.error_code(), "FORBIDDEN");
    }
    let anonymous = app
        .request("DELETE", &format!("/api/admin/users/{buyer_id}"), None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.stores.users.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let app = TestApp::new();
    let (_, admin) = app.register(ADMIN_EMAIL, None).await;
    let (seller_id, seller) = app.register("seller@x.com", Some("seller")).await;
    app.create_listing(&seller, "Cow").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{seller_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.stores.listings.find_all().await.unwrap().is_empty());

    let again = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{seller_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new();
    let (admin_id, admin) = app.register(ADMIN_EMAIL, None).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{admin_id}"),
            None,
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stores.users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleted_users_token_outlives_account() {
    let app = TestApp::new();
    let (_, admin) = app.register(ADMIN_EMAIL, None).await;
    let (buyer_id, buyer) = app.register("buyer@x.com", None).await;

    app.request(
        "DELETE",
        &format!("/api/admin/users/{buyer_id}"),
        None,
        Some(&admin),
    )
    .await;

    // No revocation: the token still passes the gate, the record is gone.
    let orders = app.request("GET", "/api/orders/my", None, Some(&buyer)).await;
    assert_eq!(orders.status, StatusCode::OK);
    let me = app.request("GET", "/api/auth/me", None, Some(&buyer)).await;
    assert_eq!(me.status, StatusCode::NOT_FOUND);
}
