//! High-level client: validation, merging and multi-step workflows.

mod attachments;
pub(crate) mod core;
mod recipients;
mod workflow;
