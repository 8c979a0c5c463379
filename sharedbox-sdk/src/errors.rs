//! Unified error types for the `sharedbox` crate.
//!
//! Failures fall into a small closed set so callers can branch on the kind
//! instead of matching messages:
//! - [`Error::Validation`]: a precondition failed before any request was sent
//! - [`Error::Request`]: the HTTP exchange failed (transport, status, format)
//! - [`Error::Parse`]: a URL could not be built
//! - [`Error::Build`]: the client could not be constructed

use reqwest::StatusCode;
use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::JsonClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid SharedBox endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required value was missing. Raised before any network activity.
    #[error("{message}")]
    Validation {
        /// Fixed, human-readable description of the missing value.
        message: String,
    },

    /// HTTP request/response failed.
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the client failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

// --- Request Error ---

/// Transport, server-side and response-format errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (connection, TLS, I/O, etc.).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The status text.
        message: String,
    },

    /// The server claimed success but sent nothing usable.
    #[error("Unexpected server response format")]
    UnexpectedFormat,

    /// JSON decoding failed when parsing a server response.
    #[error("JSON decode error: {message}")]
    DecodeJson {
        /// Error message from the JSON deserializer.
        message: String,
    },
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// The HTTP status code, for errors raised from a non-success response.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Request(RequestError::Server { status, .. }) => Some(status.as_u16()),
            _ => None,
        }
    }

    /// Returns true for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns true if the server answered successfully with an unusable body.
    pub fn is_unexpected_format(&self) -> bool {
        matches!(self, Error::Request(RequestError::UnexpectedFormat))
    }
}

/// A specialized `Result` type for `sharedbox` operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.into())
    }
}
