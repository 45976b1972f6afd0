//! Administrative use cases.

pub mod service;

pub use service::AdminService;
