#![doc = include_str!("../README.md")]
//!

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

pub mod attachment;
pub mod recipient;
pub mod security_options;
pub mod sharedbox;

pub use attachment::Attachment;
pub use recipient::{ContactMethod, DestinationType, Recipient, RecipientOptions};
pub use security_options::{RetentionPeriodType, SecurityOptions, TimeUnit};
pub use sharedbox::SharedBox;
