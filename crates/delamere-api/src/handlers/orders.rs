//! Order handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use delamere_entity::order::{Order, OrderWithListing};

use crate::dto::request::CreateOrderRequest;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let order = state
        .order_service
        .create(&auth, req.livestock_id)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/my
pub async fn my_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<OrderWithListing>>> {
    Ok(Json(state.order_service.my_orders(&auth).await?))
}
