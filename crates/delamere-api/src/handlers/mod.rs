//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod livestock;
pub mod orders;

use axum::extract::OriginalUri;

use delamere_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown API routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError(AppError::not_found(format!("No route for {}", uri.path())))
}
