//! Contact store service.
//!
//! The add/view/search/update/delete operations of the contact book, layered
//! over a [`ContactRepository`]. Every failure is returned as a [`StoreError`]
//! whose message is ready to show the user; nothing here is fatal.

use crate::domain::ContactName;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use tracing::{debug, info, warn};

/// Field key that replaces a contact's additional information on update.
pub const ADDITIONAL_INFORMATION_KEY: &str = "additional_information";

/// Changes to apply to an existing contact.
///
/// Phone number and email are only replaced when present and non-empty; an
/// empty string leaves the stored value alone. Named fields are merged in the
/// order they were added, later values overwriting earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the additional information text.
    pub fn additional_information(self, value: impl Into<String>) -> Self {
        self.field(ADDITIONAL_INFORMATION_KEY, value)
    }

    /// Merge an arbitrary named field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    fn apply_to(self, contact: &mut Contact) {
        if let Some(phone_number) = self.phone_number.filter(|p| !p.is_empty()) {
            contact.phone_number = Some(phone_number);
        }
        if let Some(email) = self.email.filter(|e| !e.is_empty()) {
            contact.email = Some(email);
        }
        for (key, value) in self.fields {
            if key == ADDITIONAL_INFORMATION_KEY {
                contact.additional_information = value;
            } else {
                contact.extra_fields.insert(key, value);
            }
        }
    }
}

/// The contact book's single table of contacts.
#[derive(Debug, Default)]
pub struct ContactStore<R = InMemoryContactRepository> {
    repository: R,
}

impl ContactStore<InMemoryContactRepository> {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryContactRepository::new())
    }
}

impl<R: ContactRepository> ContactStore<R> {
    /// Create a store over the given repository.
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// Add a new contact.
    ///
    /// # Errors
    ///
    /// - `StoreError::EmptyName` if `name` is empty
    /// - `StoreError::DuplicateName` if a contact with `name` exists; the
    ///   existing record is left untouched
    pub fn add_contact(
        &mut self,
        name: &str,
        phone_number: Option<String>,
        email: Option<String>,
        additional_information: impl Into<String>,
    ) -> StoreResult<()> {
        let name = ContactName::new(name)?;

        if self.repository.contains(name.as_str()) {
            warn!(name = %name, "Rejected duplicate contact");
            return Err(StoreError::DuplicateName(name.into_inner()));
        }

        let contact = Contact::new(name, phone_number, email, additional_information);
        let name = contact.name.clone();
        self.repository.create(contact)?;

        info!(name = %name, total = self.repository.len(), "Contact added");
        Ok(())
    }

    /// Every contact, in repository order.
    pub fn view_contacts(&self) -> Vec<Contact> {
        let contacts = self.repository.list();
        debug!("Listing {} contacts", contacts.len());
        contacts
    }

    /// Look up a contact by name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact has this name.
    pub fn search_contact(&self, name: &str) -> StoreResult<Contact> {
        match self.repository.get(name) {
            Some(contact) => {
                debug!(name, "Contact found");
                Ok(contact)
            }
            None => {
                debug!(name, "Contact not found");
                Err(StoreError::NotFound(name.to_string()))
            }
        }
    }

    /// Remove a contact, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact has this name; the store is unchanged.
    pub fn delete_contact(&mut self, name: &str) -> StoreResult<Contact> {
        match self.repository.delete(name) {
            Ok(contact) => {
                info!(name, total = self.repository.len(), "Contact deleted");
                Ok(contact)
            }
            Err(e) => {
                warn!(name, "Delete failed: {}", e);
                Err(e)
            }
        }
    }

    /// Apply `update` to the named contact.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact has this name; no record is created.
    pub fn update_contact(&mut self, name: &str, update: ContactUpdate) -> StoreResult<()> {
        let Some(mut contact) = self.repository.get(name) else {
            warn!(name, "Update failed: contact not found");
            return Err(StoreError::NotFound(name.to_string()));
        };

        update.apply_to(&mut contact);
        self.repository.update(contact)?;

        info!(name, "Contact updated");
        Ok(())
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_alice() -> ContactStore {
        let mut store = ContactStore::new();
        store
            .add_contact(
                "Alice",
                Some("555-1234".to_string()),
                Some("a@x.com".to_string()),
                "friend",
            )
            .unwrap();
        store
    }

    #[test]
    fn test_add_then_search_returns_same_fields() {
        let store = store_with_alice();
        let contact = store.search_contact("Alice").unwrap();
        assert_eq!(contact.name.as_str(), "Alice");
        assert_eq!(contact.phone_number.as_deref(), Some("555-1234"));
        assert_eq!(contact.email.as_deref(), Some("a@x.com"));
        assert_eq!(contact.additional_information, "friend");
    }

    #[test]
    fn test_add_without_phone_or_email() {
        let mut store = ContactStore::new();
        store.add_contact("Bob", None, None, "").unwrap();
        let contact = store.search_contact("Bob").unwrap();
        assert_eq!(contact.phone_number, None);
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_add_duplicate_does_not_mutate() {
        let mut store = store_with_alice();
        let before = store.search_contact("Alice").unwrap();

        let result = store.add_contact("Alice", Some("000".to_string()), None, "enemy");
        assert_eq!(result, Err(StoreError::DuplicateName("Alice".to_string())));
        assert_eq!(store.search_contact("Alice").unwrap(), before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut store = ContactStore::new();
        assert_eq!(store.add_contact("", None, None, ""), Err(StoreError::EmptyName));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_present_and_absent() {
        let mut store = store_with_alice();

        assert!(store.delete_contact("Alice").is_ok());
        assert_eq!(
            store.search_contact("Alice"),
            Err(StoreError::NotFound("Alice".to_string()))
        );

        assert!(store.delete_contact("Alice").is_err());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_update_phone_only() {
        let mut store = store_with_alice();
        store
            .update_contact("Alice", ContactUpdate::new().phone_number("555-9999"))
            .unwrap();

        let contact = store.search_contact("Alice").unwrap();
        assert_eq!(contact.phone_number.as_deref(), Some("555-9999"));
        assert_eq!(contact.email.as_deref(), Some("a@x.com"));
        assert_eq!(contact.additional_information, "friend");
    }

    #[test]
    fn test_update_empty_strings_are_no_op() {
        let mut store = store_with_alice();
        let before = store.search_contact("Alice").unwrap();

        store
            .update_contact("Alice", ContactUpdate::new().phone_number("").email(""))
            .unwrap();
        assert_eq!(store.search_contact("Alice").unwrap(), before);
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = store_with_alice();
        let update = ContactUpdate::new()
            .additional_information("colleague")
            .field("company", "Acme")
            .field("company", "Globex");
        store.update_contact("Alice", update).unwrap();

        let contact = store.search_contact("Alice").unwrap();
        assert_eq!(contact.additional_information, "colleague");
        assert_eq!(contact.extra_fields.len(), 1);
        assert_eq!(contact.extra_fields["company"], "Globex");
    }

    #[test]
    fn test_update_missing_creates_nothing() {
        let mut store = ContactStore::new();
        let result = store.update_contact("Ghost", ContactUpdate::new().phone_number("1"));
        assert_eq!(result, Err(StoreError::NotFound("Ghost".to_string())));
        assert!(store.is_empty());
    }

    #[test]
    fn test_view_empty_store() {
        let store = ContactStore::new();
        assert!(store.view_contacts().is_empty());
    }
}
