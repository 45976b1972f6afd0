//! Authorization gate for role-based route guarding.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use delamere_auth::rbac::{Operation, RbacEnforcer, RoleSet};
use delamere_service::context::RequestContext;

use crate::error::ApiResult;

/// State for one role gate: the enforcer and the roles it admits.
#[derive(Debug, Clone)]
pub struct RoleGate {
    rbac: Arc<RbacEnforcer>,
    allowed: RoleSet,
}

impl RoleGate {
    /// A gate admitting exactly `allowed`.
    pub fn new(rbac: Arc<RbacEnforcer>, allowed: RoleSet) -> Self {
        Self { rbac, allowed }
    }

    /// A gate admitting the roles the policy table lists for `operation`.
    pub fn for_operation(rbac: Arc<RbacEnforcer>, operation: Operation) -> Self {
        let allowed = rbac.policies().allowed_roles(operation);
        Self::new(rbac, allowed)
    }
}

/// Must run after `authenticate`. A request with no attached identity
/// fails `Unauthenticated`; a role outside the gate's set fails `Forbidden`.
pub async fn require_roles(
    State(gate): State<RoleGate>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let role = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.role);
    gate.rbac.require_roles(role, gate.allowed)?;

    Ok(next.run(request).await)
}
