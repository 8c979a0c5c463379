use sharedbox_common::SharedBox;
use tracing::info;

use super::core::SharedBoxClient;
use crate::errors::Result;

impl SharedBoxClient {
    /// Create a SharedBox from a draft in one go: initialize it, upload every
    /// attachment not uploaded yet, then submit it with its recipients.
    ///
    /// Steps run sequentially and the first failure aborts the workflow;
    /// nothing already done on the server is rolled back.
    pub async fn create_sharedbox(&self, draft: &SharedBox) -> Result<SharedBox> {
        let mut sharedbox = self.initialize_sharedbox(draft).await?;

        let mut attachments = Vec::with_capacity(sharedbox.attachments.len());
        for attachment in &sharedbox.attachments {
            if attachment.is_uploaded() {
                attachments.push(attachment.clone());
            } else {
                attachments.push(self.upload_attachment(&sharedbox, attachment).await?);
            }
        }
        sharedbox.attachments = attachments;

        let submitted = self.submit_sharedbox(&sharedbox).await?;

        info!(
            guid = ?submitted.guid,
            recipients = submitted.recipients.len(),
            documents = submitted.attachments.len(),
            "SharedBox created"
        );

        Ok(submitted)
    }
}
