//! RBAC enforcement: role membership and ownership checks.

use tracing::debug;

use delamere_core::error::AppError;
use delamere_entity::user::UserRole;

use super::policies::{Operation, RbacPolicies};
use super::role_set::RoleSet;

/// Enforces the policy table for authenticated callers.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Checks a caller's role against an explicit role set.
    ///
    /// `None` means no identity was established and yields
    /// `Unauthenticated`. A role outside `allowed` yields `Forbidden`.
    pub fn require_roles(&self, role: Option<UserRole>, allowed: RoleSet) -> Result<(), AppError> {
        let Some(role) = role else {
            return Err(AppError::unauthenticated("Authentication required"));
        };
        if allowed.contains(role) {
            Ok(())
        } else {
            debug!(%role, %allowed, "Role rejected");
            Err(AppError::forbidden(format!(
                "Role '{role}' is not permitted; requires one of {allowed}"
            )))
        }
    }

    /// Checks a caller against the policy for `operation`.
    pub fn authorize(&self, role: Option<UserRole>, operation: Operation) -> Result<(), AppError> {
        let policy = self.policies.policy(operation);
        if !policy.auth_required {
            return Ok(());
        }
        self.require_roles(role, policy.roles)
    }

    /// Checks that the caller owns a resource, or is an admin.
    pub fn require_owner_or_admin(
        &self,
        caller_id: i64,
        role: UserRole,
        owner_id: i64,
    ) -> Result<(), AppError> {
        if role.is_admin() || caller_id == owner_id {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "You can only modify resources you own",
            ))
        }
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}
