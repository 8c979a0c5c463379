use sharedbox_common::{Attachment, SharedBox};
use tracing::info;

use super::core::{SharedBoxClient, UPLOAD_URL_REQUIRED};
use crate::errors::{Error, Result};

impl SharedBoxClient {
    /// Upload `attachment` to the upload URL of `sharedbox`.
    ///
    /// Fails with [`Error::Validation`] before sending anything if `sharedbox`
    /// has no upload URL (it is assigned at initialization). Returns a copy of
    /// `attachment` carrying the server-assigned document guid, or no guid if
    /// the server answered without content.
    pub async fn upload_attachment(
        &self,
        sharedbox: &SharedBox,
        attachment: &Attachment,
    ) -> Result<Attachment> {
        let upload_url = sharedbox
            .upload_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::validation(UPLOAD_URL_REQUIRED))?;

        let response = self.json_client.upload_file(upload_url, attachment).await?;
        let uploaded = Attachment {
            guid: response.document_guid().map(str::to_owned),
            ..attachment.clone()
        };

        info!(filename = %attachment.filename, document_guid = ?uploaded.guid, "Attachment uploaded");

        Ok(uploaded)
    }
}
