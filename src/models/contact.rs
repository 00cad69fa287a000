//! Contact model representing a single entry in the contact book.

use crate::domain::ContactName;
use std::collections::BTreeMap;

/// Column headers for any table of contacts.
pub const CONTACT_HEADERS: [&str; 4] = ["Name", "Phone Number", "Email", "Additional Information"];

/// A contact in the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Unique name identifying the contact
    pub name: ContactName,

    /// Phone number, if one was given
    pub phone_number: Option<String>,

    /// Email address, if one was given
    pub email: Option<String>,

    /// Free-form notes about the contact (may be empty)
    pub additional_information: String,

    /// Named fields merged in by updates, ordered by key
    pub extra_fields: BTreeMap<String, String>,
}

impl Contact {
    /// Create a contact with no extra fields.
    pub fn new(
        name: ContactName,
        phone_number: Option<String>,
        email: Option<String>,
        additional_information: impl Into<String>,
    ) -> Self {
        Self {
            name,
            phone_number,
            email,
            additional_information: additional_information.into(),
            extra_fields: BTreeMap::new(),
        }
    }

    /// Phone number for display; empty when unset.
    pub fn phone_display(&self) -> &str {
        self.phone_number.as_deref().unwrap_or("")
    }

    /// Email for display; empty when unset.
    pub fn email_display(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Additional information followed by each extra field as `key: value`,
    /// joined with `"; "`. Empty parts are skipped.
    pub fn additional_display(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.extra_fields.len() + 1);
        if !self.additional_information.is_empty() {
            parts.push(self.additional_information.clone());
        }
        parts.extend(
            self.extra_fields
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value)),
        );
        parts.join("; ")
    }

    /// The contact as a table row matching [`CONTACT_HEADERS`].
    pub fn table_row(&self) -> Vec<String> {
        vec![
            self.name.to_string(),
            self.phone_display().to_string(),
            self.email_display().to_string(),
            self.additional_display(),
        ]
    }
}
