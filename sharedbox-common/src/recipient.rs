//! SharedBox recipients and their contact methods.

use serde::{Deserialize, Serialize};

/// Kind of phone number a recipient can be reached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    /// Home phone
    HomePhone,
    /// Cell phone
    CellPhone,
    /// Office phone
    OfficePhone,
    /// Any other phone
    OtherPhone,
}

impl std::fmt::Display for DestinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DestinationType::HomePhone => "home_phone",
                DestinationType::CellPhone => "cell_phone",
                DestinationType::OfficePhone => "office_phone",
                DestinationType::OtherPhone => "other_phone",
            }
        )
    }
}

impl std::str::FromStr for DestinationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home_phone" => Ok(DestinationType::HomePhone),
            "cell_phone" => Ok(DestinationType::CellPhone),
            "office_phone" => Ok(DestinationType::OfficePhone),
            "other_phone" => Ok(DestinationType::OtherPhone),
            _ => Err(format!("Invalid destination type: {}", s)),
        }
    }
}

/// A phone number used to authenticate a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMethod {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// The phone number.
    pub destination: String,
    /// The kind of phone.
    pub destination_type: DestinationType,
    /// Whether the number was verified by the recipient.
    #[serde(default)]
    pub verified: bool,
    /// Creation timestamp, as reported by the server.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp, as reported by the server.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ContactMethod {
    /// A new, unsaved contact method.
    pub fn new(destination: impl Into<String>, destination_type: DestinationType) -> Self {
        Self {
            id: None,
            destination: destination.into(),
            destination_type,
            verified: false,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Server-side state of a recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipientOptions {
    /// The recipient was locked out of the SharedBox.
    pub locked: bool,
    /// Emails to the recipient bounced.
    pub bounced_email: bool,
    /// The recipient verified their identity.
    pub verified: bool,
    /// Phone numbers the recipient can authenticate with.
    pub contact_methods: Vec<ContactMethod>,
}

/// A person a SharedBox is shared with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipient {
    /// Server-assigned identifier, `None` until the recipient is saved.
    pub id: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address. Required before the recipient is sent to the server.
    pub email: Option<String>,
    /// Server-side state and contact methods.
    pub options: RecipientOptions,
}

/// Wire form of a recipient, as expected by the SharedBox API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecipientBody<'a> {
    email: Option<&'a str>,
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    contact_methods: Vec<ContactMethodBody<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactMethodBody<'a> {
    destination: &'a str,
    destination_type: DestinationType,
}

/// Payload sent when adding a recipient: `{"recipient": {...}}`.
#[derive(Debug, Serialize)]
pub struct RecipientPayload<'a> {
    recipient: RecipientBody<'a>,
}

impl Recipient {
    /// A new recipient, identified by email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Set first and last names.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Add a phone number the recipient can authenticate with.
    pub fn with_contact_method(mut self, contact_method: ContactMethod) -> Self {
        self.options.contact_methods.push(contact_method);
        self
    }

    /// Returns true if the recipient carries a non-empty email.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }

    pub(crate) fn body(&self) -> RecipientBody<'_> {
        RecipientBody {
            email: self.email.as_deref(),
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            contact_methods: self
                .options
                .contact_methods
                .iter()
                .map(|c| ContactMethodBody {
                    destination: &c.destination,
                    destination_type: c.destination_type,
                })
                .collect(),
        }
    }

    /// The payload sent to the add-recipient endpoint.
    pub fn to_payload(&self) -> RecipientPayload<'_> {
        RecipientPayload {
            recipient: self.body(),
        }
    }

    /// The add-recipient payload, serialized.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_payload()).expect("Recipient::to_json")
    }

    /// Returns a copy reconciled with the recipient the server sent back.
    ///
    /// Identifier and options come from the server; names and email come from
    /// the server when it reports them.
    pub fn merged_with(&self, server: &Recipient) -> Recipient {
        Recipient {
            id: server.id.clone().or_else(|| self.id.clone()),
            first_name: server.first_name.clone().or_else(|| self.first_name.clone()),
            last_name: server.last_name.clone().or_else(|| self.last_name.clone()),
            email: server.email.clone().or_else(|| self.email.clone()),
            options: server.options.clone(),
        }
    }
}
