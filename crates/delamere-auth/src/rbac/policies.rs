//! Operation-to-role policy table.

use serde::{Deserialize, Serialize};

use super::role_set::RoleSet;

/// Every operation exposed by the marketplace API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    // Public catalogue
    /// Browse all listings.
    ListListings,
    /// View one listing.
    ReadListing,

    // Account
    /// Read the caller's own profile.
    ReadProfile,
    /// Update the caller's own profile.
    UpdateProfile,

    // Selling
    /// Create a listing owned by the caller.
    CreateListing,
    /// Delete a listing. Also subject to ownership.
    DeleteListing,
    /// List the caller's own listings.
    ListOwnListings,

    // Buying
    /// Place an order as the caller.
    CreateOrder,
    /// List the caller's own orders.
    ReadOwnOrders,

    // Administration
    /// List every user.
    AdminListUsers,
    /// List every listing.
    AdminListListings,
    /// List every order.
    AdminListOrders,
    /// Delete a user account.
    AdminDeleteUser,
}

/// How one operation is guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Whether a verified identity is required at all.
    pub auth_required: bool,
    /// Roles allowed once authenticated.
    pub roles: RoleSet,
    /// Whether the caller must also own the target resource (admins exempt).
    pub owner_or_admin: bool,
}

impl Policy {
    const fn public() -> Self {
        Self {
            auth_required: false,
            roles: RoleSet::ANY,
            owner_or_admin: false,
        }
    }

    const fn roles(roles: RoleSet) -> Self {
        Self {
            auth_required: true,
            roles,
            owner_or_admin: false,
        }
    }

    const fn owned(roles: RoleSet) -> Self {
        Self {
            auth_required: true,
            roles,
            owner_or_admin: true,
        }
    }
}

/// The fixed policy table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacPolicies;

impl RbacPolicies {
    /// Creates the policy table.
    pub fn new() -> Self {
        Self
    }

    /// Looks up the policy for an operation.
    pub const fn policy(&self, operation: Operation) -> Policy {
        match operation {
            Operation::ListListings | Operation::ReadListing => Policy::public(),
            Operation::ReadProfile | Operation::UpdateProfile | Operation::ReadOwnOrders => {
                Policy::roles(RoleSet::ANY)
            }
            Operation::CreateListing | Operation::ListOwnListings => {
                Policy::roles(RoleSet::SELLER_OR_ADMIN)
            }
            Operation::DeleteListing => Policy::owned(RoleSet::SELLER_OR_ADMIN),
            Operation::CreateOrder => Policy::roles(RoleSet::BUYER_OR_ADMIN),
            Operation::AdminListUsers
            | Operation::AdminListListings
            | Operation::AdminListOrders
            | Operation::AdminDeleteUser => Policy::roles(RoleSet::ADMIN),
        }
    }

    /// Roles allowed to invoke an operation.
    pub const fn allowed_roles(&self, operation: Operation) -> RoleSet {
        self.policy(operation).roles
    }
}
