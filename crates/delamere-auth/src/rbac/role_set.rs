//! Compact sets of roles.

use std::fmt;

use delamere_entity::user::UserRole;

/// A set of roles, stored as a bitmask over [`UserRole::bit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    /// Every authenticated role.
    pub const ANY: Self = Self::of(&UserRole::ALL);
    /// Admins only.
    pub const ADMIN: Self = Self::of(&[UserRole::Admin]);
    /// Sellers and admins.
    pub const SELLER_OR_ADMIN: Self = Self::of(&[UserRole::Seller, UserRole::Admin]);
    /// Buyers and admins.
    pub const BUYER_OR_ADMIN: Self = Self::of(&[UserRole::Buyer, UserRole::Admin]);

    /// Builds a set from a slice of roles.
    pub const fn of(roles: &[UserRole]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Whether `role` is a member.
    pub const fn contains(&self, role: UserRole) -> bool {
        self.0 & role.bit() != 0
    }

    /// Iterates the member roles in privilege order.
    pub fn iter(&self) -> impl Iterator<Item = UserRole> + '_ {
        UserRole::ALL.into_iter().filter(|r| self.contains(*r))
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|r| r.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
