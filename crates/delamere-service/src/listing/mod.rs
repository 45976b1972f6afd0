//! Livestock listing use cases.

pub mod service;

pub use service::{ListingService, NewListing};
