//! HTTP integration tests driving the full router over in-memory stores.

mod helpers;

mod admin_test;
mod auth_test;
mod livestock_test;
mod order_test;
