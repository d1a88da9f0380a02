//! Contact and search form stubs.
//!
//! Neither form talks to a server. Submitting the contact form always thanks
//! the visitor and resets the form; submitting the search form always shows
//! an informational message. What each would have sent is logged at debug
//! level so the wiring can be checked from the console.

use crate::config::NotificationConfig;
use crate::notify::Severity;
use std::collections::BTreeMap;
use tracing::debug;

/// Notification to show in response to a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    pub message: String,
    pub severity: Severity,
    /// Whether the form should be reset afterwards.
    pub reset: bool,
}

/// Entries collected from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            fields: entries.into_iter().collect(),
        }
    }

    /// Names of fields that were filled in.
    pub fn filled_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// The search the form would have run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub location: String,
    pub property_type: String,
}

impl SearchQuery {
    /// Missing selects read as empty strings.
    pub fn new(location: Option<String>, property_type: Option<String>) -> Self {
        Self {
            location: location.unwrap_or_default(),
            property_type: property_type.unwrap_or_default(),
        }
    }
}

pub fn contact_submitted(
    submission: &ContactSubmission,
    messages: &NotificationConfig,
) -> FormResponse {
    debug!(fields = ?submission.filled_fields(), "contact form submitted");
    FormResponse {
        message: messages.contact_message.clone(),
        severity: Severity::Success,
        reset: true,
    }
}

pub fn search_submitted(query: &SearchQuery, messages: &NotificationConfig) -> FormResponse {
    debug!(
        location = %query.location,
        property_type = %query.property_type,
        "search form submitted"
    );
    FormResponse {
        message: messages.search_message.clone(),
        severity: Severity::Info,
        reset: false,
    }
}
