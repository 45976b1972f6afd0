//! Registration, login and profile operations.

use std::sync::Arc;

use tracing::{info, warn};

use delamere_auth::jwt::JwtEncoder;
use delamere_auth::password::{PasswordHasher, PasswordValidator};
use delamere_core::config::AuthConfig;
use delamere_core::error::AppError;
use delamere_database::UserStore;
use delamere_entity::user::{County, CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Input for a new account. Field shapes are checked at the HTTP boundary;
/// this service applies the domain rules.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// WhatsApp number.
    pub whatsapp_number: Option<String>,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// County name.
    pub county: String,
    /// Requested role, `buyer` when absent.
    pub role: Option<String>,
}

/// A session token together with the account it was issued for.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Signed session token.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Handles account creation and credential checks.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Session token issuer.
    encoder: Arc<JwtEncoder>,
    /// Auth configuration, for the admin allow-list.
    config: Arc<AuthConfig>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
            config,
        }
    }

    /// Decides the role a new account receives.
    ///
    /// Allow-listed emails always become admins. Otherwise only `buyer` and
    /// `seller` may be requested; anything else is rejected.
    pub fn resolve_role(&self, requested: Option<&str>, email: &str) -> Result<UserRole, AppError> {
        if self.config.is_admin_email(email) {
            return Ok(UserRole::Admin);
        }

        let role = match requested {
            None => UserRole::default(),
            Some(raw) => raw.parse::<UserRole>()?,
        };
        if !role.is_self_assignable() {
            return Err(AppError::validation(format!(
                "Role '{role}' cannot be chosen at registration"
            )));
        }
        Ok(role)
    }

    /// Registers a new account and issues its first token.
    pub async fn register(&self, input: Registration) -> Result<AuthOutcome, AppError> {
        self.validator.validate(&input.password)?;
        let county = County::parse(&input.county)?;
        let role = self.resolve_role(input.role.as_deref(), &input.email)?;

        // Cheap early exit; the store's uniqueness constraint settles races.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash(input.password).await?;
        let user = self
            .users
            .create(&CreateUser {
                name: input.name,
                phone_number: input.phone_number,
                whatsapp_number: input.whatsapp_number.filter(|n| !n.trim().is_empty()),
                email: input.email,
                password_hash,
                county,
                role,
            })
            .await?;

        let token = self.encoder.issue(user.id, user.role)?;
        info!(user_id = user.id, role = %user.role, "User registered");

        Ok(AuthOutcome { token, user })
    }

    /// Checks credentials and issues a token.
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        let invalid = || AppError::unauthenticated("Invalid email or password");

        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("Login failed: unknown email");
            return Err(invalid());
        };

        let valid = self
            .hasher
            .verify(password.to_string(), user.password_hash.clone())
            .await?;
        if !valid {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(invalid());
        }

        let token = self.encoder.issue(user.id, user.role)?;
        info!(user_id = user.id, "User logged in");

        Ok(AuthOutcome { token, user })
    }

    /// Returns the caller's account.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Sets the caller's WhatsApp number.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        whatsapp_number: &str,
    ) -> Result<User, AppError> {
        let whatsapp_number = whatsapp_number.trim();
        if whatsapp_number.is_empty() {
            return Err(AppError::validation("WhatsApp number is required"));
        }

        let user = self
            .users
            .update_whatsapp(ctx.user_id, whatsapp_number)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = ctx.user_id, "Profile updated");
        Ok(user)
    }
}
