//! Low-level JSON transport: one method per SharedBox REST endpoint.

mod api;
pub(crate) mod core;
pub mod types;
