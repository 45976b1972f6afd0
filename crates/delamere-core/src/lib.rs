//! # delamere-core
//!
//! Core crate for the Delamere livestock marketplace. Contains the
//! configuration schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other Delamere crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
