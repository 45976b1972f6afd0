//! Livestock listing handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use delamere_entity::listing::{Listing, ListingWithSeller};

use crate::dto::request::CreateListingRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/livestock
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ListingWithSeller>>> {
    Ok(Json(state.listing_service.list().await?))
}

/// GET /api/livestock/{id}
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ListingWithSeller>> {
    let id = parse_id(&id)?;
    Ok(Json(state.listing_service.get(id).await?))
}

/// GET /api/livestock/mine
pub async fn mine(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Vec<Listing>>> {
    Ok(Json(state.listing_service.mine(&auth).await?))
}

/// POST /api/livestock
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateListingRequest>,
) -> ApiResult<(StatusCode, Json<Listing>)> {
    let listing = state.listing_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// DELETE /api/livestock/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.listing_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Livestock deleted successfully")))
}
