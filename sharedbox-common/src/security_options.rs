//! Per-session security policy: recipient authentication and document retention.

use serde::{Deserialize, Serialize};

/// Unit used for expiration and retention periods.
///
/// Examples:
/// - "hours" -> hour
/// - "days" -> day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Hour
    Hours,
    /// Day
    Days,
    /// Week
    Weeks,
    /// Month
    Months,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimeUnit::Hours => "hours",
                TimeUnit::Days => "days",
                TimeUnit::Weeks => "weeks",
                TimeUnit::Months => "months",
            }
        )
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(TimeUnit::Hours),
            "days" => Ok(TimeUnit::Days),
            "weeks" => Ok(TimeUnit::Weeks),
            "months" => Ok(TimeUnit::Months),
            _ => Err(format!("Invalid time unit: {}", s)),
        }
    }
}

/// What happens to the documents of a SharedBox once it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPeriodType {
    /// Documents are deleted when the SharedBox expires.
    DiscardAtExpiration,
    /// Documents are kept for the retention period after expiration.
    RetainAtExpiration,
    /// Documents are never deleted.
    DoNotDiscard,
}

impl std::fmt::Display for RetentionPeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RetentionPeriodType::DiscardAtExpiration => "discard_at_expiration",
                RetentionPeriodType::RetainAtExpiration => "retain_at_expiration",
                RetentionPeriodType::DoNotDiscard => "do_not_discard",
            }
        )
    }
}

impl std::str::FromStr for RetentionPeriodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard_at_expiration" => Ok(RetentionPeriodType::DiscardAtExpiration),
            "retain_at_expiration" => Ok(RetentionPeriodType::RetainAtExpiration),
            "do_not_discard" => Ok(RetentionPeriodType::DoNotDiscard),
            _ => Err(format!("Invalid retention period type: {}", s)),
        }
    }
}

/// Security options of a SharedBox.
///
/// Every field is optional: a missing value means "use the account default"
/// when submitting, and "not reported" when read from a server response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityOptions {
    /// Recipients may ask the portal to remember their device.
    pub allow_remember_me: Option<bool>,
    /// Recipients may authenticate with an SMS code.
    pub allow_sms: Option<bool>,
    /// Recipients may authenticate with a voice call.
    pub allow_voice: Option<bool>,
    /// Recipients may authenticate with an email code.
    pub allow_email: Option<bool>,
    /// Expiration delay, expressed in `expiration_unit`.
    pub expiration_value: Option<u32>,
    /// Unit of `expiration_value`.
    pub expiration_unit: Option<TimeUnit>,
    /// Retention policy applied at expiration.
    pub retention_period_type: Option<RetentionPeriodType>,
    /// Retention delay, expressed in `retention_period_unit`.
    pub retention_period_value: Option<u32>,
    /// Unit of `retention_period_value`.
    pub retention_period_unit: Option<TimeUnit>,
    /// The owner may close the SharedBox before it expires.
    pub allow_manual_close: Option<bool>,
}

impl SecurityOptions {
    /// Overwrite every field `other` carries, keeping the rest.
    pub fn merge(&mut self, other: &SecurityOptions) -> &mut Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }

        take!(
            allow_remember_me,
            allow_sms,
            allow_voice,
            allow_email,
            expiration_value,
            expiration_unit,
            retention_period_type,
            retention_period_value,
            retention_period_unit,
            allow_manual_close
        );

        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == SecurityOptions::default()
    }
}
