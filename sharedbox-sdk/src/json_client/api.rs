use reqwest::{Method, RequestBuilder, multipart};
use sharedbox_common::{Attachment, Recipient, SharedBox};
use tracing::debug;
use url::Url;

use super::core::JsonClient;
use super::types::{
    CloseResponse, InitializeResponse, RecipientResponse, SubmitResponse, UploadResponse,
};
use crate::constants::{
    AUTHORIZATION_TOKEN_HEADER, CACHE_BUSTER_PARAM, SERVICE_URL_PATH, SHAREDBOXES_PATH,
    UPLOAD_FILE_FIELD,
};
use crate::errors::{RequestError, Result};
use crate::util::{check_http_status, read_json};

impl JsonClient {
    /// Resolve the root URL of the SharedBox API.
    ///
    /// Sends `GET {endpoint}/services/sharedbox/server/url` and uses the text
    /// body as the root of every API URL. The answer is cached for the
    /// lifetime of this client and its clones; call
    /// [`Self::invalidate_service_url`] to force a new discovery.
    ///
    /// Concurrent first calls may each run the discovery; the last answer wins.
    pub async fn resolve_service_url(&self) -> Result<Url> {
        if let Some(url) = self.service_url.read().await.as_ref() {
            return Ok(url.clone());
        }

        let discovery = format!("{}{SERVICE_URL_PATH}", self.endpoint());
        debug!(url = %discovery, "Resolving SharedBox service URL");

        let response = self.http.get(&discovery).send().await?;
        let text = check_http_status(response)?.text().await?;
        let root = parse_service_root(&text)?;

        debug!(root = %root, "Resolved SharedBox service URL");
        *self.service_url.write().await = Some(root.clone());

        Ok(root)
    }

    /// Forget the cached service URL; the next call runs discovery again.
    pub async fn invalidate_service_url(&self) {
        *self.service_url.write().await = None;
    }

    /// Create a new SharedBox owned by `email`.
    ///
    /// `GET {root}api/sharedboxes/new?email={email}`, plus `&rand={epoch millis}`
    /// when cache busting is enabled.
    pub async fn initialize_sharedbox(&self, email: &str) -> Result<InitializeResponse> {
        let root = self.resolve_service_url().await?;
        let rand = self.cache_busting().then(|| self.clock.now_millis());
        let url = initialize_url(&root, email, rand)?;

        debug!(%url, "Initializing SharedBox");
        let response = self.http.get(url).send().await?;

        read_json(response).await
    }

    /// Submit a SharedBox. `POST {root}api/sharedboxes`.
    pub async fn submit_sharedbox(&self, sharedbox: &SharedBox) -> Result<SubmitResponse> {
        let url = self.api_url(SHAREDBOXES_PATH).await?;

        debug!(%url, guid = ?sharedbox.guid, "Submitting SharedBox");
        let response = self
            .authorized(Method::POST, url)
            .json(&sharedbox.to_payload())
            .send()
            .await?;

        read_json(response).await
    }

    /// Add a recipient to a SharedBox. `POST {root}api/sharedboxes/{guid}/recipients`.
    pub async fn add_recipient(
        &self,
        sharedbox_guid: &str,
        recipient: &Recipient,
    ) -> Result<RecipientResponse> {
        let root = self.resolve_service_url().await?;
        let url = sharedbox_url(&root, sharedbox_guid, "recipients")?;

        debug!(%url, "Adding SharedBox recipient");
        let response = self
            .authorized(Method::POST, url)
            .json(&recipient.to_payload())
            .send()
            .await?;

        read_json(response).await
    }

    /// Close a SharedBox. `PATCH {root}api/sharedboxes/{guid}/close`.
    pub async fn close_sharedbox(&self, sharedbox_guid: &str) -> Result<CloseResponse> {
        let root = self.resolve_service_url().await?;
        let url = sharedbox_url(&root, sharedbox_guid, "close")?;

        debug!(%url, "Closing SharedBox");
        let response = self.authorized(Method::PATCH, url).send().await?;

        read_json(response).await
    }

    /// Upload a file to a SharedBox upload URL, as a multipart `file` field.
    ///
    /// The upload URL is absolute (assigned at initialization), so no
    /// discovery happens.
    pub async fn upload_file(
        &self,
        upload_url: &str,
        attachment: &Attachment,
    ) -> Result<UploadResponse> {
        let url = Url::parse(upload_url)?;
        let part = multipart::Part::bytes(attachment.content.to_vec())
            .file_name(attachment.filename.clone())
            .mime_str(&attachment.content_type)?;
        let form = multipart::Form::new().part(UPLOAD_FILE_FIELD, part);

        debug!(%url, filename = %attachment.filename, size = attachment.size(), "Uploading file");
        let response = self.http.post(url).multipart(form).send().await?;

        read_json(response).await
    }

    // === Internals ===

    /// Join a path onto the discovered root.
    async fn api_url(&self, path: &str) -> Result<Url> {
        let root = self.resolve_service_url().await?;
        Ok(root.join(path)?)
    }

    fn authorized(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(AUTHORIZATION_TOKEN_HEADER, self.api_token())
    }
}

/// Parse the discovery answer into a root URL ending with `/`.
fn parse_service_root(text: &str) -> Result<Url> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RequestError::UnexpectedFormat.into());
    }

    let root = if text.ends_with('/') {
        Url::parse(text)?
    } else {
        Url::parse(&format!("{text}/"))?
    };

    Ok(root)
}

/// `{root}api/sharedboxes/{guid}/{action}`, with `guid` percent-encoded as a
/// single path segment.
fn sharedbox_url(root: &Url, guid: &str, action: &str) -> Result<Url> {
    let mut url = root.join(SHAREDBOXES_PATH)?;
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .push(guid)
        .push(action);
    Ok(url)
}

fn initialize_url(root: &Url, email: &str, rand: Option<u64>) -> Result<Url> {
    let mut url = root.join(&format!("{SHAREDBOXES_PATH}/new"))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("email", email);
        if let Some(rand) = rand {
            query.append_pair(CACHE_BUSTER_PARAM, &rand.to_string());
        }
    }
    Ok(url)
}
