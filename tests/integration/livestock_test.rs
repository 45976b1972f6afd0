//! Integration tests for listing endpoints and their role gates.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{self, ADMIN_EMAIL, TestApp};

#[tokio::test]
async fn test_seller_listing_lifecycle_scenario() {
    let app = TestApp::new();

    let (seller_id, seller) = app.register("a@x.com", Some("seller")).await;
    let duplicate = app
        .request(
            "POST",
            "/api/auth/register",
            Some(helpers::registration_body("a@x.com")),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let bad_login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": "nope-nope" })),
            None,
        )
        .await;
    assert_eq!(bad_login.status, StatusCode::UNAUTHORIZED);

    let created = app
        .request(
            "POST",
            "/api/livestock",
            Some(helpers::listing_body("Friesian Cow")),
            Some(&seller),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["sellerId"], seller_id);
    let listing_id = created.body["id"].as_i64().unwrap();
    let path = format!("/api/livestock/{listing_id}");

    let (_, other_seller) = app.register("b@x.com", Some("seller")).await;
    let forbidden = app.request("DELETE", &path, None, Some(&other_seller)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.error_code(), "FORBIDDEN");

    let (_, admin) = app.register(ADMIN_EMAIL, None).await;
    let deleted = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_reads_embed_seller() {
    let app = TestApp::new();
    let (seller_id, seller) = app.register("farm@x.com", Some("seller")).await;
    let id = app.create_listing(&seller, "Boer Goat").await;

    let list = app.request("GET", "/api/livestock", None, None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 1);

    let one = app
        .request("GET", &format!("/api/livestock/{id}"), None, None)
        .await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["title"], "Boer Goat");
    assert_eq!(one.body["price"], "85000.00");
    assert_eq!(one.body["seller"]["id"], seller_id);
    assert_eq!(one.body["seller"]["phoneNumber"], "0712345678");
    assert!(one.body["seller"].get("email").is_none());
}

#[tokio::test]
async fn test_non_numeric_id_is_validation_error() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/livestock/abc", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid ID");
}

#[tokio::test]
async fn test_buyer_cannot_create_listing() {
    let app = TestApp::new();
    let (_, buyer) = app.register("buyer@x.com", None).await;

    let response = app
        .request(
            "POST",
            "/api/livestock",
            Some(helpers::listing_body("Not mine to sell")),
            Some(&buyer),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.stores.listings.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_listing_requires_token() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/livestock", Some(helpers::listing_body("x")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_seller_id_in_body_is_ignored() {
    let app = TestApp::new();
    let (victim_id, _) = app.register("victim@x.com", Some("seller")).await;
    let (attacker_id, attacker) = app.register("attacker@x.com", Some("seller")).await;

    let mut body = helpers::listing_body("Spoofed");
    body["sellerId"] = json!(victim_id);
    let response = app
        .request("POST", "/api/livestock", Some(body), Some(&attacker))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["sellerId"], attacker_id);
}

#[tokio::test]
async fn test_listing_validation() {
    let app = TestApp::new();
    let (_, seller) = app.register("v@x.com", Some("seller")).await;

    let mut negative = helpers::listing_body("Cow");
    negative["price"] = json!("-5");
    let mut three_decimals = helpers::listing_body("Cow");
    three_decimals["price"] = json!("10.123");
    let mut blank_title = helpers::listing_body("");
    blank_title["title"] = json!("");
    let mut bad_county = helpers::listing_body("Cow");
    bad_county["county"] = json!("Narnia");

    for body in [negative, three_decimals, blank_title, bad_county] {
        let response = app
            .request("POST", "/api/livestock", Some(body), Some(&seller))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    }
}

#[tokio::test]
async fn test_owner_deletes_and_lists_own() {
    let app = TestApp::new();
    let (_, seller) = app.register("own@x.com", Some("seller")).await;
    let (_, other) = app.register("other@x.com", Some("seller")).await;
    let mine = app.create_listing(&seller, "Mine").await;
    app.create_listing(&other, "Theirs").await;

    let listed = app
        .request("GET", "/api/livestock/mine", None, Some(&seller))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let titles: Vec<&str> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Mine"]);

    let deleted = app
        .request("DELETE", &format!("/api/livestock/{mine}"), None, Some(&seller))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app
        .request("DELETE", &format!("/api/livestock/{mine}"), None, Some(&seller))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_without_token_is_unauthenticated() {
    let app = TestApp::new();
    let (_, seller) = app.register("s@x.com", Some("seller")).await;
    let id = app.create_listing(&seller, "Cow").await;

    let response = app
        .request("DELETE", &format!("/api/livestock/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unserved_method_is_405_before_auth() {
    let app = TestApp::new();
    let (_, buyer) = app.register("b@x.com", None).await;

    for path in ["/api/livestock", "/api/livestock/1", "/api/admin/users", "/api/orders"] {
        let anonymous = app.request("PATCH", path, None, None).await;
        assert_eq!(anonymous.status, StatusCode::METHOD_NOT_ALLOWED, "{path}");

        let signed_in = app.request("PATCH", path, None, Some(&buyer)).await;
        assert_eq!(signed_in.status, StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }

    let gated = app.request("POST", "/api/livestock", None, None).await;
    assert_eq!(gated.status, StatusCode::UNAUTHORIZED);
}
