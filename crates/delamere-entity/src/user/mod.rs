//! User domain entities.

pub mod county;
pub mod model;
pub mod role;

pub use county::{County, KENYAN_COUNTIES};
pub use model::{CreateUser, PublicUser, User};
pub use role::UserRole;
