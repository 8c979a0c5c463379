//! Response bodies of the SharedBox API.

use serde::Deserialize;
use sharedbox_common::{Recipient, SecurityOptions, SharedBox};

/// Answer to a SharedBox initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitializeResponse {
    /// Identifier of the new SharedBox.
    pub guid: Option<String>,
    /// Where attachments of the new SharedBox are uploaded.
    pub upload_url: Option<String>,
}

/// Answer to a SharedBox submission.
///
/// The server reports security options either as a nested `securityOptions`
/// object or as flat top-level fields; both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitResponse {
    /// Identifier of the SharedBox.
    pub guid: Option<String>,
    /// Owner's email.
    pub user_email: Option<String>,
    /// Where attachments are uploaded.
    pub upload_url: Option<String>,
    /// Owner's user id.
    pub user_id: Option<u64>,
    /// Notification subject.
    pub subject: Option<String>,
    /// Notification message.
    pub message: Option<String>,
    /// Notification language.
    pub notification_language: Option<String>,
    /// Server status.
    pub status: Option<String>,
    /// Preview URL.
    pub preview_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Expiration timestamp.
    pub expiration: Option<String>,
    /// Close timestamp.
    pub closed_at: Option<String>,
    /// Recipients as registered by the server.
    pub recipients: Option<Vec<Recipient>>,
    /// Nested security options.
    pub security_options: Option<SecurityOptions>,
    /// Security options reported as top-level fields.
    #[serde(flatten)]
    pub flat_security_options: SecurityOptions,
}

impl SubmitResponse {
    /// Security options of the response; nested values win over flat ones.
    pub fn resolved_security_options(&self) -> SecurityOptions {
        let mut options = self.flat_security_options.clone();
        if let Some(nested) = &self.security_options {
            options.merge(nested);
        }
        options
    }

    /// Returns `sharedbox` with every field this response carries overwritten.
    ///
    /// Reported recipients replace the local list; each one is reconciled
    /// with the local recipient of the same email, if any.
    pub fn merged_into(&self, sharedbox: &SharedBox) -> SharedBox {
        let mut merged = sharedbox.clone();

        if let Some(user_email) = &self.user_email {
            merged.user_email = user_email.clone();
        }
        if let Some(recipients) = &self.recipients {
            merged.recipients = recipients
                .iter()
                .map(|server| {
                    sharedbox
                        .recipients
                        .iter()
                        .find(|local| local.email.is_some() && local.email == server.email)
                        .map_or_else(|| server.clone(), |local| local.merged_with(server))
                })
                .collect();
        }

        macro_rules! take {
            ($($field:ident),*) => {
                $(if let Some(value) = &self.$field {
                    merged.$field = Some(value.clone());
                })*
            };
        }

        take!(
            guid,
            upload_url,
            user_id,
            subject,
            message,
            notification_language,
            status,
            preview_url,
            created_at,
            updated_at,
            expiration,
            closed_at
        );

        merged
            .security_options
            .merge(&self.resolved_security_options());

        merged
    }
}

/// A recipient as returned by the add-recipient endpoint.
pub type RecipientResponse = sharedbox_common::Recipient;

/// Answer to a close request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CloseResponse {
    /// Whether the SharedBox was closed.
    pub result: Option<bool>,
    /// Human-readable outcome.
    pub message: Option<String>,
}

/// Answer to a file upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadResponse {
    /// The document created for the uploaded file.
    pub temporary_document: Option<TemporaryDocument>,
}

impl UploadResponse {
    /// Identifier of the created document, if the server reported one.
    pub fn document_guid(&self) -> Option<&str> {
        self.temporary_document
            .as_ref()
            .and_then(|document| document.document_guid.as_deref())
    }
}

/// A document created by an upload, pending its SharedBox submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemporaryDocument {
    /// Document identifier.
    pub document_guid: Option<String>,
}
