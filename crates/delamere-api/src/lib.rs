//! # delamere-api
//!
//! HTTP API layer for the Delamere marketplace built on Axum.
//!
//! Provides the REST endpoints, the authentication and role-gate
//! middleware, extractors, DTOs, and the mapping from `AppError` to HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
