//! Integration tests for order placement and order history.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{ADMIN_EMAIL, TestApp};

#[tokio::test]
async fn test_buyer_places_pending_order() {
    let app = TestApp::new();
    let (_, seller) = app.register("seller@x.com", Some("seller")).await;
    let (buyer_id, buyer) = app.register("buyer@x.com", None).await;
    let listing = app.create_listing(&seller, "Cow").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "livestockId": listing })),
            Some(&buyer),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["buyerId"], buyer_id);
    assert_eq!(response.body["livestockId"], listing);
    assert_eq!(response.body["paymentStatus"], "pending");
}

#[tokio::test]
async fn test_buyer_id_in_body_is_ignored() {
    let app = TestApp::new();
    let (_, seller) = app.register("seller@x.com", Some("seller")).await;
    let (victim_id, _) = app.register("victim@x.com", None).await;
    let (buyer_id, buyer) = app.register("buyer@x.com", None).await;
    let listing = app.create_listing(&seller, "Cow").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "livestockId": listing, "buyerId": victim_id })),
            Some(&buyer),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["buyerId"], buyer_id);
    assert!(
        app.stores
            .orders
            .find_by_buyer(victim_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_seller_cannot_order() {
    let app = TestApp::new();
    let (_, seller) = app.register("seller@x.com", Some("seller")).await;
    let listing = app.create_listing(&seller, "Cow").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "livestockId": listing })),
            Some(&seller),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_order() {
    let app = TestApp::new();
    let (_, seller) = app.register("seller@x.com", Some("seller")).await;
    let (_, admin) = app.register(ADMIN_EMAIL, None).await;
    let listing = app.create_listing(&seller, "Cow").await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "livestockId": listing })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_order_for_unknown_listing_is_not_found() {
    let app = TestApp::new();
    let (_, buyer) = app.register("buyer@x.com", None).await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "livestockId": 9999 })),
            Some(&buyer),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_orders_are_filtered_and_survive_listing_deletion() {
    let app = TestApp::new();
    let (_, seller) = app.register("seller@x.com", Some("seller")).await;
    let (_, alice) = app.register("alice@x.com", None).await;
    let (_, bob) = app.register("bob@x.com", None).await;
    let cow = app.create_listing(&seller, "Cow").await;

    for token in [&alice, &bob] {
        let response = app
            .request(
                "POST",
                "/api/orders",
                Some(json!({ "livestockId": cow })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let mine = app.request("GET", "/api/orders/my", None, Some(&alice)).await;
    assert_eq!(mine.status, StatusCode::OK);
    let orders = mine.body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["livestock"]["title"], "Cow");
    assert_eq!(orders[0]["seller"]["name"], "Test Farmer");

    app.request("DELETE", &format!("/api/livestock/{cow}"), None, Some(&seller))
        .await;

    let after = app.request("GET", "/api/orders/my", None, Some(&alice)).await;
    let orders = after.body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert!(orders[0]["livestock"].is_null());
    assert!(orders[0]["seller"].is_null());
}

#[tokio::test]
async fn test_my_orders_requires_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/orders/my", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
