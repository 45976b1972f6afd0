//! # delamere-auth
//!
//! Credential handling and access control for the Delamere marketplace.
//!
//! ## Modules
//!
//! - `jwt`: session token issuing and verification (HS256, stateless)
//! - `password`: Argon2id password hashing and length policy
//! - `rbac`: role sets, the per-operation policy table and ownership checks

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Operation, RbacEnforcer, RbacPolicies, RoleSet};
