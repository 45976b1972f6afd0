//! # delamere-database
//!
//! Persistence for users, livestock listings and orders. The service layer
//! depends only on the store traits in [`store`]; [`provider::Stores`] picks
//! PostgreSQL repositories or in-memory stores from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::Stores;
pub use store::{ListingStore, OrderStore, UserStore};
