//! Account use cases: registration, login and the caller's own profile.

pub mod service;

pub use service::{AuthOutcome, AuthService, Registration};
