//! Livestock listing entities.

pub mod model;
pub mod price;

pub use model::{CreateListing, Listing, ListingSummary, ListingWithSeller, SellerSummary};
pub use price::Price;
