//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Result};

// Transport
pub use crate::{JsonClient, JsonClientBuilder};

// High level client
pub use crate::SharedBoxClient;

// Domain values
pub use crate::{Attachment, Recipient, SecurityOptions, SharedBox};
