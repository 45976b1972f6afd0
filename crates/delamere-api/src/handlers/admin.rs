//! Admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use delamere_entity::listing::ListingWithSeller;
use delamere_entity::order::Order;
use delamere_entity::user::PublicUser;

use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, parse_id};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PublicUser>>> {
    let users = state.admin_service.list_users(&auth).await?;
    Ok(Json(users.iter().map(|u| u.to_public()).collect()))
}

/// GET /api/admin/livestock
pub async fn list_livestock(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ListingWithSeller>>> {
    Ok(Json(state.admin_service.list_listings(&auth).await?))
}

/// GET /api/admin/orders
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.order_service.all(&auth).await?))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.admin_service.delete_user(&auth, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
