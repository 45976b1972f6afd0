//! PostgreSQL repository implementations of the store traits.

pub mod listing;
pub mod order;
pub mod user;

pub use listing::ListingRepository;
pub use order::OrderRepository;
pub use user::UserRepository;
