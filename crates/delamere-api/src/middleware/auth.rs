//! Authentication gate.
//!
//! Verifies the bearer token and attaches the caller's [`RequestContext`]
//! to the request extensions. Requests without a valid token never reach
//! the handler.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use delamere_service::context::RequestContext;

use crate::error::ApiResult;
use crate::extractors::bearer_token;
use crate::state::AppState;

/// Rejects the request with `Unauthenticated` unless it carries a valid
/// session token.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = bearer_token(request.headers())?;
    let claims = state.jwt_decoder.verify(&token)?;

    debug!(user_id = claims.id, role = %claims.role, "Request authenticated");
    request
        .extensions_mut()
        .insert(RequestContext::from(&claims));

    Ok(next.run(request).await)
}
