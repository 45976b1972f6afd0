//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the marketplace.
///
/// `Admin` is never self-assigned; it is reachable only through the
/// registration allow-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses listings and places orders.
    #[default]
    Buyer,
    /// Lists animals for sale.
    Seller,
    /// Oversees users and listings.
    Admin,
}

impl UserRole {
    /// Every role, in privilege order.
    pub const ALL: [UserRole; 3] = [Self::Buyer, Self::Seller, Self::Admin];

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether a client may request this role for itself at registration.
    pub fn is_self_assignable(&self) -> bool {
        matches!(self, Self::Buyer | Self::Seller)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }

    /// Bit used by role sets.
    pub const fn bit(&self) -> u8 {
        match self {
            Self::Buyer => 0b001,
            Self::Seller => 0b010,
            Self::Admin => 0b100,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = delamere_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            _ => Err(delamere_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: buyer, seller"
            ))),
        }
    }
}
