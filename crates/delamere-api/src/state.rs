//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use delamere_auth::jwt::{JwtDecoder, JwtEncoder};
use delamere_auth::password::{PasswordHasher, PasswordValidator};
use delamere_auth::rbac::RbacEnforcer;
use delamere_core::config::AppConfig;
use delamere_core::result::AppResult;
use delamere_database::Stores;
use delamere_service::{AdminService, AuthService, ListingService, OrderService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// User, listing and order stores
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer
    pub rbac: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and profile
    pub auth_service: Arc<AuthService>,
    /// Livestock listings
    pub listing_service: Arc<ListingService>,
    /// Orders
    pub order_service: Arc<OrderService>,
    /// Administration
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    /// Wires services and auth primitives over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> AppResult<Self> {
        let auth_config = Arc::new(config.auth.clone());

        let password_hasher = Arc::new(PasswordHasher::new(&auth_config)?);
        let password_validator = Arc::new(PasswordValidator::new(&auth_config));
        let jwt_encoder = Arc::new(JwtEncoder::new(&auth_config)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&auth_config));
        let rbac = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            password_hasher,
            password_validator,
            jwt_encoder,
            auth_config,
        ));
        let listing_service = Arc::new(ListingService::new(stores.clone(), Arc::clone(&rbac)));
        let order_service = Arc::new(OrderService::new(stores.clone(), Arc::clone(&rbac)));
        let admin_service = Arc::new(AdminService::new(stores.clone(), Arc::clone(&rbac)));

        Ok(Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            rbac,
            auth_service,
            listing_service,
            order_service,
            admin_service,
        })
    }
}
