//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::county::County;
use super::role::UserRole;

/// A registered marketplace user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// WhatsApp number, when different from or in addition to the phone.
    pub whatsapp_number: Option<String>,
    /// Unique email address, compared exactly as stored.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Home county.
    pub county: County,
    /// Marketplace role.
    pub role: UserRole,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the client-facing view of this user.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            phone_number: self.phone_number.clone(),
            whatsapp_number: self.whatsapp_number.clone(),
            county: self.county.clone(),
            created_at: self.created_at,
        }
    }
}

/// User record as returned to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Phone number.
    pub phone_number: String,
    /// WhatsApp number.
    pub whatsapp_number: Option<String>,
    /// County.
    pub county: County,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// WhatsApp number.
    pub whatsapp_number: Option<String>,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// County.
    pub county: County,
    /// Assigned role.
    pub role: UserRole,
}
