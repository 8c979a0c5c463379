use sharedbox_common::{Recipient, SharedBox};
use tracing::info;

use super::core::{EMAIL_REQUIRED, SharedBoxClient, require_guid};
use crate::errors::{Error, Result};

impl SharedBoxClient {
    /// Add `recipient` to `sharedbox` on the server.
    ///
    /// Fails with [`Error::Validation`] before sending anything if `sharedbox`
    /// has no guid or `recipient` has no email. Returns `recipient` reconciled
    /// with the server's answer (identifier assigned). `sharedbox` is left
    /// untouched; push the returned recipient into it once the call succeeds.
    pub async fn add_recipient(
        &self,
        sharedbox: &SharedBox,
        recipient: &Recipient,
    ) -> Result<Recipient> {
        let guid = require_guid(sharedbox)?;
        if !recipient.has_email() {
            return Err(Error::validation(EMAIL_REQUIRED));
        }

        let response = self.json_client.add_recipient(guid, recipient).await?;
        let added = recipient.merged_with(&response);

        info!(guid, recipient = ?added.id, "Recipient added");

        Ok(added)
    }
}
