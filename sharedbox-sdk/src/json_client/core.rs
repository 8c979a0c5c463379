use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use url::Url;

use crate::clock::{Clock, SystemClock};
use crate::constants::DEFAULT_USER_AGENT;
use crate::errors::BuildError;
use crate::SharedBoxClient;

#[derive(Debug, Clone)]
#[must_use]
/// Configures a [`JsonClient`] before construction.
///
/// Most code obtains this via [`JsonClient::builder()`].
///
/// # Defaults
/// - Cache busting: disabled
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: `sharedbox-rs@<crate-version>` plus any [`Self::user_agent_extra`]
/// - Clock: [`SystemClock`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use sharedbox::JsonClient;
/// let client = JsonClient::builder("token", 1, "https://sharedbox.example.com")
///     .cache_busting(true)
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, sharedbox::BuildError>(())
/// ```
pub struct JsonClientBuilder {
    api_token: String,
    user_id: u64,
    endpoint: String,
    cache_busting: bool,
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,

    clock: Arc<dyn Clock>,
}

impl JsonClientBuilder {
    /// Append `rand=<epoch millis>` to initialization requests so intermediate
    /// HTTP caches never answer them.
    pub fn cache_busting(mut self, enabled: bool) -> Self {
        self.cache_busting = enabled;
        self
    }

    /// Set HTTP requests timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.http_request_timeout = Some(timeout);
        self
    }

    /// Append an extra user-agent segment after the default `sharedbox-rs@<version>`.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(mut self, extra: S) -> Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Replace the time source of the cache-buster.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build [JsonClient]
    pub fn build(self) -> Result<JsonClient, BuildError> {
        let endpoint = self.endpoint.trim().trim_end_matches('/').to_string();
        Url::parse(&endpoint)?;

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT.to_string(),
        };

        let mut http_builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(JsonClient {
            http: http_builder.build()?,
            api_token: self.api_token,
            user_id: self.user_id,
            endpoint,
            cache_busting: self.cache_busting,
            clock: self.clock,
            service_url: Arc::new(RwLock::new(None)),
        })
    }

    /// Build a [`SharedBoxClient`] on top of the configured transport.
    pub fn build_sharedbox_client(self) -> Result<SharedBoxClient, BuildError> {
        Ok(SharedBoxClient::from_json_client(self.build()?))
    }
}

/// Transport client for the SharedBox REST API.
///
/// One async method per endpoint. Each call resolves the API root through the
/// discovery endpoint (once per client, see
/// [`JsonClient::resolve_service_url`]), sends the request with the API token
/// and normalizes the response into typed JSON or an [`crate::Error`].
///
/// It performs no validation of its own; [`crate::SharedBoxClient`] layers
/// preconditions and merging on top of it.
///
/// Clones are cheap and share the HTTP connection pool and the discovered
/// service URL.
#[derive(Clone, Debug)]
pub struct JsonClient {
    pub(crate) http: reqwest::Client,
    api_token: String,
    user_id: u64,
    endpoint: String,
    cache_busting: bool,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) service_url: Arc<RwLock<Option<Url>>>,
}

impl JsonClient {
    /// Creates a client with default settings.
    pub fn new(
        api_token: impl Into<String>,
        user_id: u64,
        endpoint: impl Into<String>,
    ) -> Result<JsonClient, BuildError> {
        Self::builder(api_token, user_id, endpoint).build()
    }

    /// Returns a builder to edit settings before creating [`JsonClient`].
    pub fn builder(
        api_token: impl Into<String>,
        user_id: u64,
        endpoint: impl Into<String>,
    ) -> JsonClientBuilder {
        JsonClientBuilder {
            api_token: api_token.into(),
            user_id,
            endpoint: endpoint.into(),
            cache_busting: false,
            http_request_timeout: None,
            user_agent_extra: None,
            clock: Arc::new(SystemClock),
        }
    }

    // === Getters ===

    /// The API token sent in the `Authorization-Token` header.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// The user id this client acts for.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// The configured endpoint, without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether initialization requests carry the cache-buster.
    pub fn cache_busting(&self) -> bool {
        self.cache_busting
    }
}
