//! Route definitions for the Delamere HTTP API.
//!
//! All routes are mounted under `/api`. Each protected route carries two
//! route layers: `authenticate` runs first and attaches the caller, then a
//! [`RoleGate`] built from that route's own [`Operation`] checks the role.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{MethodRouter, delete, get, post, put},
};

use delamere_auth::rbac::Operation;

use crate::handlers;
use crate::middleware::auth::authenticate;
use crate::middleware::rbac::{RoleGate, require_roles};
use crate::state::AppState;

/// Builds the `/api` router with every route group and the JSON fallback.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(account_routes(&state))
        .merge(seller_routes(&state))
        .merge(buyer_routes(&state))
        .merge(admin_routes(&state))
        .fallback(handlers::not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Wraps one method router in the authenticate + role gate pair, admitting
/// the roles the policy table lists for `operation`.
///
/// Layers sit on the method router, not the group, so a method the path
/// does not serve still answers 405 before any token check.
fn guarded(
    route: MethodRouter<AppState>,
    state: &AppState,
    operation: Operation,
) -> MethodRouter<AppState> {
    let gate = RoleGate::for_operation(state.rbac.clone(), operation);

    route
        .route_layer(axum_middleware::from_fn_with_state(gate, require_roles))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ))
}

/// Endpoints reachable without a token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/livestock", get(handlers::livestock::list))
        .route("/livestock/{id}", get(handlers::livestock::get_one))
}

/// Any signed-in user.
fn account_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/auth/me",
            guarded(get(handlers::auth::me), state, Operation::ReadProfile),
        )
        .route(
            "/auth/profile",
            guarded(
                put(handlers::auth::update_profile),
                state,
                Operation::UpdateProfile,
            ),
        )
        .route(
            "/orders/my",
            guarded(
                get(handlers::orders::my_orders),
                state,
                Operation::ReadOwnOrders,
            ),
        )
}

/// Sellers and admins.
fn seller_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/livestock",
            guarded(
                post(handlers::livestock::create),
                state,
                Operation::CreateListing,
            ),
        )
        .route(
            "/livestock/mine",
            guarded(
                get(handlers::livestock::mine),
                state,
                Operation::ListOwnListings,
            ),
        )
        .route(
            "/livestock/{id}",
            guarded(
                delete(handlers::livestock::remove),
                state,
                Operation::DeleteListing,
            ),
        )
}

/// Buyers and admins.
fn buyer_routes(state: &AppState) -> Router<AppState> {
    Router::new().route(
        "/orders",
        guarded(
            post(handlers::orders::create),
            state,
            Operation::CreateOrder,
        ),
    )
}

/// Admin-only endpoints.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            guarded(
                get(handlers::admin::list_users),
                state,
                Operation::AdminListUsers,
            ),
        )
        .route(
            "/admin/users/{id}",
            guarded(
                delete(handlers::admin::delete_user),
                state,
                Operation::AdminDeleteUser,
            ),
        )
        .route(
            "/admin/livestock",
            guarded(
                get(handlers::admin::list_livestock),
                state,
                Operation::AdminListListings,
            ),
        )
        .route(
            "/admin/orders",
            guarded(
                get(handlers::admin::list_orders),
                state,
                Operation::AdminListOrders,
            ),
        )
}
