use super::traits::ContactRepository;
use crate::domain::ContactName;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::collections::BTreeMap;

/// Process-lifetime contact storage.
///
/// Contacts are kept in a `BTreeMap` keyed by name, so listing is ordered by name.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: BTreeMap<ContactName, Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn get(&self, name: &str) -> Option<Contact> {
        self.contacts.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    fn create(&mut self, contact: Contact) -> StoreResult<()> {
        if self.contacts.contains_key(contact.name.as_str()) {
            return Err(StoreError::DuplicateName(contact.name.into_inner()));
        }
        self.contacts.insert(contact.name.clone(), contact);
        Ok(())
    }

    fn update(&mut self, contact: Contact) -> StoreResult<()> {
        match self.contacts.get_mut(contact.name.as_str()) {
            Some(existing) => {
                *existing = contact;
                Ok(())
            }
            None => Err(StoreError::NotFound(contact.name.into_inner())),
        }
    }

    fn delete(&mut self, name: &str) -> StoreResult<Contact> {
        self.contacts
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
