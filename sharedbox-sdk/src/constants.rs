//! Paths and headers of the SharedBox API.

/// Discovery path, relative to the configured endpoint. Answers with the
/// root URL of the SharedBox API as plain text.
pub const SERVICE_URL_PATH: &str = "/services/sharedbox/server/url";

/// SharedBoxes collection, relative to the discovered root.
pub const SHAREDBOXES_PATH: &str = "api/sharedboxes";

/// Header carrying the API token.
pub const AUTHORIZATION_TOKEN_HEADER: &str = "Authorization-Token";

/// Query parameter appended by the cache-buster.
pub const CACHE_BUSTER_PARAM: &str = "rand";

/// Multipart field holding the uploaded file.
pub const UPLOAD_FILE_FIELD: &str = "file";

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("sharedbox-rs", "@", env!("CARGO_PKG_VERSION"));
