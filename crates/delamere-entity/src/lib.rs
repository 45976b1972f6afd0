//! # delamere-entity
//!
//! Domain entity models for the Delamere livestock marketplace. Every struct
//! in this crate represents a database table row or a domain value object.
//! Database entities derive `sqlx::FromRow` and serialize with the camelCase
//! field names the HTTP API exposes.

pub mod listing;
pub mod order;
pub mod user;
