//! `AuthUser` extractor and bearer-token parsing.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use delamere_core::error::AppError;
use delamere_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    match headers.typed_try_get::<Authorization<Bearer>>() {
        Ok(Some(Authorization(bearer))) => Ok(bearer.token().to_string()),
        Ok(None) => Err(AppError::unauthenticated("Missing Authorization header")),
        Err(_) => Err(AppError::unauthenticated(
            "Invalid Authorization header format",
        )),
    }
}

/// Authenticated caller available in handlers.
///
/// Reuses the context placed by the `authenticate` middleware when present;
/// otherwise verifies the bearer token itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(AuthUser(ctx.clone()));
        }

        let token = bearer_token(&parts.headers)?;
        let claims = state.jwt_decoder.verify(&token)?;
        Ok(AuthUser(RequestContext::from(&claims)))
    }
}
