//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use delamere_api::{AppState, build_app};
use delamere_core::config::{AppConfig, StoreProvider};
use delamere_database::Stores;
use delamere_database::memory::MemoryStore;

/// Email on the admin allow-list in test configuration.
pub const ADMIN_EMAIL: &str = "admin@delamere.com";

/// Password used for every test account.
pub const PASSWORD: &str = "secret1";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing stores for direct inspection
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let stores = Stores::memory(MemoryStore::new());
        let state = AppState::new(config.clone(), stores.clone()).expect("Failed to build state");

        Self {
            router: build_app(state),
            stores,
            config,
        }
    }

    /// Register an account and return `(id, token)`.
    pub async fn register(&self, email: &str, role: Option<&str>) -> (i64, String) {
        let mut body = registration_body(email);
        if let Some(role) = role {
            body["role"] = json!(role);
        }

        let response = self
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

        let id = response.body["user"]["id"].as_i64().expect("user id");
        let token = response.body["token"]
            .as_str()
            .expect("token")
            .to_string();
        (id, token)
    }

    /// Create a listing as the token's owner and return its id
    pub async fn create_listing(&self, token: &str, title: &str) -> i64 {
        let response = self
            .request("POST", "/api/livestock", Some(listing_body(title)), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().expect("listing id")
    }

    /// Make an HTTP request against the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a raw body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The machine-readable error code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// Memory provider, cheap hashing and a one-address admin allow-list
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = StoreProvider::Memory;
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.argon2_memory_kib = 1024;
    config.auth.argon2_iterations = 1;
    config.auth.admin_emails = vec![ADMIN_EMAIL.to_string()];
    config
}

/// The shipped `config/default.toml`, made runnable in-process
pub fn shipped_config() -> AppConfig {
    let mut config =
        AppConfig::load("config/default.toml", None).expect("Failed to load default config");
    config.database.provider = StoreProvider::Memory;
    config.auth.argon2_memory_kib = 1024;
    config.auth.argon2_iterations = 1;
    config
}

/// A valid registration body for `email`
pub fn registration_body(email: &str) -> Value {
    json!({
        "name": "Test Farmer",
        "phoneNumber": "0712345678",
        "email": email,
        "password": PASSWORD,
        "county": "Nairobi",
    })
}

/// A valid create-listing body
pub fn listing_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Vaccinated and dewormed",
        "price": "85000",
        "breed": "Friesian",
        "healthStatus": "Excellent",
        "county": "Nakuru",
    })
}
