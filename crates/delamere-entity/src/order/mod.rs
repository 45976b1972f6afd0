//! Purchase order entities.

pub mod model;
pub mod status;

pub use model::{CreateOrder, Order, OrderWithListing};
pub use status::PaymentStatus;
