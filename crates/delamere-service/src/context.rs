//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use delamere_auth::jwt::Claims;
use delamere_entity::user::UserRole;

/// Identity of the caller for the current request.
///
/// Built from verified token claims by the authentication middleware and
/// passed into service methods, so every operation knows who is acting.
/// Acting identities (seller, buyer) are always taken from here, never from
/// a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }
}

impl From<&Claims> for RequestContext {
    fn from(claims: &Claims) -> Self {
        Self::new(claims.id, claims.role)
    }
}
