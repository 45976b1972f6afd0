//! Response DTOs.

use serde::{Deserialize, Serialize};

use delamere_entity::user::PublicUser;

/// Register and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Outcome message.
    pub message: String,
    /// Session token.
    pub token: String,
    /// The authenticated user.
    pub user: PublicUser,
}

/// Profile update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Outcome message.
    pub message: String,
    /// The updated user.
    pub user: PublicUser,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Server version.
    pub version: String,
}
