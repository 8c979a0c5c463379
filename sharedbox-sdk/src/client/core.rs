use sharedbox_common::SharedBox;
use tracing::info;

use crate::errors::{Error, Result};
use crate::json_client::types::CloseResponse;
use crate::{JsonClient, JsonClientBuilder};

pub(crate) const GUID_REQUIRED: &str = "SharedBox GUID cannot be null or undefined";
pub(crate) const EMAIL_REQUIRED: &str = "Recipient email cannot be null or undefined";
pub(crate) const UPLOAD_URL_REQUIRED: &str = "SharedBox upload URL cannot be null or undefined";

/// High-level SharedBox client.
///
/// Wraps a [`JsonClient`], checks preconditions before any request is sent,
/// and reconciles server answers with the caller's values.
///
/// Operations borrow their inputs and return new values: the caller's
/// [`SharedBox`] is never mutated, so a failed call leaves no half-applied
/// state behind.
///
/// # Example
/// ```no_run
/// # use sharedbox::{SharedBoxClient, SharedBox, Recipient};
/// # async fn run() -> sharedbox::Result<()> {
/// let client = SharedBoxClient::new("token", 1, "https://sharedbox.example.com")?;
///
/// let draft = SharedBox::new("owner@acme.com").with_subject("Contracts");
/// let sharedbox = client.initialize_sharedbox(&draft).await?;
/// let recipient = client
///     .add_recipient(&sharedbox, &Recipient::new("john.doe@email.com"))
///     .await?;
/// let sharedbox = client
///     .submit_sharedbox(&sharedbox.with_recipient(recipient))
///     .await?;
/// client.close_sharedbox(&sharedbox).await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct SharedBoxClient {
    pub(crate) json_client: JsonClient,
}

impl SharedBoxClient {
    /// Construct with default transport settings.
    pub fn new(
        api_token: impl Into<String>,
        user_id: u64,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            json_client: JsonClient::new(api_token, user_id, endpoint)?,
        })
    }

    /// Returns a transport builder; finish with
    /// [`JsonClientBuilder::build_sharedbox_client`].
    pub fn builder(
        api_token: impl Into<String>,
        user_id: u64,
        endpoint: impl Into<String>,
    ) -> JsonClientBuilder {
        JsonClient::builder(api_token, user_id, endpoint)
    }

    /// Construct from an already-configured transport.
    pub fn from_json_client(json_client: JsonClient) -> Self {
        Self { json_client }
    }

    /// The underlying transport.
    pub fn json_client(&self) -> &JsonClient {
        &self.json_client
    }

    /// Initialize `sharedbox` on the server.
    ///
    /// Returns a copy of `sharedbox` carrying the server-assigned `guid` and
    /// `upload_url` (both `None` if the server answered without content).
    pub async fn initialize_sharedbox(&self, sharedbox: &SharedBox) -> Result<SharedBox> {
        let response = self
            .json_client
            .initialize_sharedbox(&sharedbox.user_email)
            .await?;

        info!(guid = ?response.guid, "SharedBox initialized");

        Ok(SharedBox {
            guid: response.guid,
            upload_url: response.upload_url,
            ..sharedbox.clone()
        })
    }

    /// Submit `sharedbox`.
    ///
    /// Fails with [`Error::Validation`] before sending anything if `sharedbox`
    /// has no guid. Returns a copy of `sharedbox` with every field the server
    /// reported merged in, security options included.
    pub async fn submit_sharedbox(&self, sharedbox: &SharedBox) -> Result<SharedBox> {
        require_guid(sharedbox)?;

        let response = self.json_client.submit_sharedbox(sharedbox).await?;
        let submitted = response.merged_into(sharedbox);

        info!(guid = ?submitted.guid, status = ?submitted.status, "SharedBox submitted");

        Ok(submitted)
    }

    /// Close `sharedbox`, returning the server's answer as is.
    ///
    /// Fails with [`Error::Validation`] before sending anything if `sharedbox`
    /// has no guid.
    pub async fn close_sharedbox(&self, sharedbox: &SharedBox) -> Result<CloseResponse> {
        let guid = require_guid(sharedbox)?;

        let response = self.json_client.close_sharedbox(guid).await?;

        info!(guid, result = ?response.result, "SharedBox closed");

        Ok(response)
    }
}

pub(crate) fn require_guid(sharedbox: &SharedBox) -> Result<&str> {
    sharedbox.guid().ok_or_else(|| Error::validation(GUID_REQUIRED))
}
