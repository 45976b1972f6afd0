//! Role-based access control (RBAC) enforcement.

pub mod enforcer;
pub mod policies;
pub mod role_set;

pub use enforcer::RbacEnforcer;
pub use policies::{Operation, RbacPolicies};
pub use role_set::RoleSet;
