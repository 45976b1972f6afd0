//! Order use cases.

pub mod service;

pub use service::OrderService;
