//! Admin oversight of users and listings.

use std::sync::Arc;

use tracing::info;

use delamere_auth::rbac::{Operation, RbacEnforcer};
use delamere_core::error::AppError;
use delamere_core::result::AppResult;
use delamere_database::Stores;
use delamere_entity::listing::ListingWithSeller;
use delamere_entity::user::User;

use crate::context::RequestContext;
use crate::listing::service::attach_sellers;

/// Handles administrative operations. Every method requires the admin role.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Backing stores.
    stores: Stores,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(stores: Stores, rbac: Arc<RbacEnforcer>) -> Self {
        Self { stores, rbac }
    }

    /// Lists every user, newest first.
    pub async fn list_users(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
        self.rbac.authorize(Some(ctx.role), Operation::AdminListUsers)?;
        self.stores.users.find_all(None).await
    }

    /// Lists every listing with its seller.
    pub async fn list_listings(&self, ctx: &RequestContext) -> AppResult<Vec<ListingWithSeller>> {
        self.rbac
            .authorize(Some(ctx.role), Operation::AdminListListings)?;
        let listings = self.stores.listings.find_all().await?;
        attach_sellers(self.stores.users.as_ref(), listings).await
    }

    /// Deletes a user with their listings and orders.
    ///
    /// Admins cannot delete their own account. Tokens already issued to the
    /// deleted user stay valid until they expire.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: i64) -> AppResult<()> {
        self.rbac.authorize(Some(ctx.role), Operation::AdminDeleteUser)?;

        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }
        if !self.stores.users.delete(user_id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id, deleted_by = ctx.user_id, "User deleted");
        Ok(())
    }
}
