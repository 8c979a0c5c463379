#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

mod client;
pub mod clock;
pub mod constants;
pub mod errors;
mod json_client;
mod util;

pub mod prelude;

#[cfg(test)]
mod test_utils;

// --- PUBLIC API EXPORTS ---
// Transport
pub use json_client::core::{JsonClient, JsonClientBuilder};
pub use json_client::types;
// High level client
pub use client::core::SharedBoxClient;

// Error and clock
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{BuildError, Error, Result};

// Re-exports
pub use reqwest::StatusCode;
pub use sharedbox_common::{
    Attachment, ContactMethod, DestinationType, Recipient, RecipientOptions,
    RetentionPeriodType, SecurityOptions, SharedBox, TimeUnit,
};
