//! # delamere-service
//!
//! Business logic for the Delamere marketplace. Each service works against
//! the store traits and the auth primitives to implement one group of use
//! cases, re-checking the caller's role against the policy table.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod admin;
pub mod auth;
pub mod context;
pub mod listing;
pub mod order;

#[cfg(test)]
mod test_support;

pub use admin::AdminService;
pub use auth::{AuthOutcome, AuthService, Registration};
pub use context::RequestContext;
pub use listing::{ListingService, NewListing};
pub use order::OrderService;
