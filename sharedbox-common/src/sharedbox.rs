//! The SharedBox: one sharing transaction bundling recipients, attachments
//! and security policy.

use serde::{Deserialize, Serialize};

use crate::{
    attachment::Attachment,
    recipient::{Recipient, RecipientBody},
    security_options::{RetentionPeriodType, SecurityOptions, TimeUnit},
};

/// A SharedBox, as held by the client.
///
/// `guid` and `upload_url` are assigned by the server when the SharedBox is
/// initialized; the remaining server fields are filled in on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedBox {
    /// Server-assigned identifier. Required by every operation but initialization.
    pub guid: Option<String>,
    /// Email of the owner.
    pub user_email: String,
    /// Where attachments of this SharedBox are uploaded.
    pub upload_url: Option<String>,
    /// Subject of the notification sent to recipients.
    pub subject: Option<String>,
    /// Message of the notification sent to recipients.
    pub message: Option<String>,
    /// Language of the notification sent to recipients.
    pub notification_language: Option<String>,
    /// Recipients of the SharedBox.
    pub recipients: Vec<Recipient>,
    /// Files of the SharedBox.
    #[serde(skip)]
    pub attachments: Vec<Attachment>,
    /// Security policy.
    pub security_options: SecurityOptions,
    /// Owner's user id, as reported by the server.
    pub user_id: Option<u64>,
    /// Server status, e.g. `in_progress` or `closed`.
    pub status: Option<String>,
    /// Preview URL of the submitted SharedBox.
    pub preview_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Expiration timestamp.
    pub expiration: Option<String>,
    /// Close timestamp, set once the SharedBox is closed.
    pub closed_at: Option<String>,
}

/// Wire form of a SharedBox, as expected by the submission endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SharedBoxBody<'a> {
    guid: Option<&'a str>,
    user_email: &'a str,
    upload_url: Option<&'a str>,
    subject: Option<&'a str>,
    message: Option<&'a str>,
    recipients: Vec<RecipientBody<'a>>,
    document_ids: Vec<&'a str>,
    expiration_value: Option<u32>,
    expiration_unit: Option<TimeUnit>,
    retention_period_type: Option<RetentionPeriodType>,
    retention_period_value: Option<u32>,
    retention_period_unit: Option<TimeUnit>,
    notification_language: Option<&'a str>,
}

/// Payload sent when submitting a SharedBox: `{"sharedbox": {...}}`.
#[derive(Debug, Serialize)]
pub struct SharedBoxPayload<'a> {
    sharedbox: SharedBoxBody<'a>,
}

/// Status reported by the server once a SharedBox is closed.
pub const STATUS_CLOSED: &str = "closed";

impl SharedBox {
    /// A new SharedBox owned by `user_email`.
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            ..Default::default()
        }
    }

    /// Set the notification subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the notification message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the notification language.
    pub fn with_notification_language(mut self, language: impl Into<String>) -> Self {
        self.notification_language = Some(language.into());
        self
    }

    /// Set the security policy.
    pub fn with_security_options(mut self, security_options: SecurityOptions) -> Self {
        self.security_options = security_options;
        self
    }

    /// Add a recipient.
    pub fn with_recipient(mut self, recipient: Recipient) -> Self {
        self.recipients.push(recipient);
        self
    }

    /// Add an attachment.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    // === Getters ===

    /// Returns the identifier if the server assigned one.
    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref().filter(|g| !g.is_empty())
    }

    /// Returns true once the server reported the SharedBox as closed.
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some() || self.status.as_deref() == Some(STATUS_CLOSED)
    }

    /// Document identifiers of the uploaded attachments.
    pub fn document_ids(&self) -> Vec<&str> {
        self.attachments
            .iter()
            .filter_map(|a| a.guid.as_deref())
            .collect()
    }

    // === Serialization ===

    /// The payload sent to the submission endpoint.
    pub fn to_payload(&self) -> SharedBoxPayload<'_> {
        let options = &self.security_options;

        SharedBoxPayload {
            sharedbox: SharedBoxBody {
                guid: self.guid.as_deref(),
                user_email: &self.user_email,
                upload_url: self.upload_url.as_deref(),
                subject: self.subject.as_deref(),
                message: self.message.as_deref(),
                recipients: self.recipients.iter().map(Recipient::body).collect(),
                document_ids: self.document_ids(),
                expiration_value: options.expiration_value,
                expiration_unit: options.expiration_unit,
                retention_period_type: options.retention_period_type,
                retention_period_value: options.retention_period_value,
                retention_period_unit: options.retention_period_unit,
                notification_language: self.notification_language.as_deref(),
            },
        }
    }

    /// The submission payload, serialized.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_payload()).expect("SharedBox::to_json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sharedbox() -> SharedBox {
        SharedBox {
            user_email: "email".into(),
            subject: Some("subject".into()),
            message: Some("this is a message".into()),
            upload_url: Some("wowUrl".into()),
            notification_language: Some("Russian".into()),
            expiration: Some("2018-02-04".into()),
            user_id: Some(1),
            status: Some("in_progress".into()),
            preview_url: Some("aaa.bbb".into()),
            created_at: Some("2018-02-03".into()),
            updated_at: Some("2018-02-04".into()),
            ..Default::default()
        }
    }

    #[test]
    fn to_json() {
        assert_eq!(
            sharedbox().to_json(),
            r#"{"sharedbox":{"guid":null,"userEmail":"email","uploadUrl":"wowUrl","subject":"subject","message":"this is a message","recipients":[],"documentIds":[],"expirationValue":null,"expirationUnit":null,"retentionPeriodType":null,"retentionPeriodValue":null,"retentionPeriodUnit":null,"notificationLanguage":"Russian"}}"#
        );
    }

    #[test]
    fn to_json_carries_recipients_documents_and_policy() {
        let sharedbox = sharedbox()
            .with_recipient(Recipient::new("foo@bar.baz"))
            .with_attachment(Attachment::new("a.txt", "text/plain", "aa").with_guid("doc1"))
            .with_attachment(Attachment::new("b.txt", "text/plain", "bb"))
            .with_security_options(SecurityOptions {
                expiration_value: Some(5),
                expiration_unit: Some(TimeUnit::Days),
                retention_period_type: Some(RetentionPeriodType::DoNotDiscard),
                ..Default::default()
            });

        let value: serde_json::Value = serde_json::from_str(&sharedbox.to_json()).unwrap();
        let body = &value["sharedbox"];

        assert_eq!(body["recipients"][0]["email"], "foo@bar.baz");
        assert_eq!(body["documentIds"], serde_json::json!(["doc1"]));
        assert_eq!(body["expirationValue"], 5);
        assert_eq!(body["expirationUnit"], "days");
        assert_eq!(body["retentionPeriodType"], "do_not_discard");
    }

    #[test]
    fn deserializes_server_sharedbox() {
        let sharedbox: SharedBox = serde_json::from_str(
            r#"{
                "userEmail": "user@acme.com",
                "guid": "1c820789a50747df8746aa5d71922a3f",
                "uploadUrl": "upload_url",
                "recipients": [],
                "message": "lorem ipsum...",
                "subject": "Donec rutrum congue leo eget malesuada.",
                "notificationLanguage": "en",
                "securityOptions": {
                    "allowRememberMe": true,
                    "expirationValue": 5,
                    "expirationUnit": "days"
                },
                "userId": 1,
                "status": "in_progress",
                "previewUrl": "http://sharedbox.com/sharedboxes/dhjewg67ewtfg476/preview",
                "createdAt": "2018-05-24T14:45:35.062Z",
                "updatedAt": "2018-05-24T14:45:35.589Z",
                "expiration": "2018-05-31T14:45:35.038Z",
                "closedAt": null
            }"#,
        )
        .unwrap();

        assert_eq!(sharedbox.guid(), Some("1c820789a50747df8746aa5d71922a3f"));
        assert_eq!(sharedbox.security_options.expiration_value, Some(5));
        assert!(!sharedbox.is_closed());
    }

    #[test]
    fn empty_guid_is_no_guid() {
        let mut sharedbox = SharedBox::new("user@acme.com");
        assert_eq!(sharedbox.guid(), None);

        sharedbox.guid = Some(String::new());
        assert_eq!(sharedbox.guid(), None);
    }

    #[test]
    fn closed_by_timestamp_or_status() {
        let open = SharedBox {
            status: Some("in_progress".into()),
            ..SharedBox::new("user@acme.com")
        };
        assert!(!open.is_closed());

        let by_timestamp = SharedBox {
            closed_at: Some("2018-06-01T10:00:00.000Z".into()),
            ..open.clone()
        };
        assert!(by_timestamp.is_closed());

        let by_status = SharedBox {
            status: Some(STATUS_CLOSED.into()),
            ..open
        };
        assert!(by_status.is_closed());
    }
}
