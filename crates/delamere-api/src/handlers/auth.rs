//! Auth handlers: register, login, me, profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use delamere_entity::user::PublicUser;

use crate::dto::request::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::dto::response::{AuthResponse, ProfileResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let outcome = state.auth_service.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token: outcome.token,
            user: outcome.user.to_public(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token: outcome.token,
        user: outcome.user.to_public(),
    }))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<PublicUser>> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(user.to_public()))
}

/// PUT /api/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state
        .auth_service
        .update_profile(&auth, &req.whatsapp_number)
        .await?;

    Ok(Json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: user.to_public(),
    }))
}
