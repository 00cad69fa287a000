use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that tracks
/// method calls for verification. Clones share state, so a test can keep a
/// handle after moving one into a store.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a contact without counting a call.
    pub fn seed(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.name.to_string(), contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls to methods that can change stored data.
    pub fn write_calls(&self) -> usize {
        ["create", "update", "delete"]
            .iter()
            .map(|m| self.get_call_count(m))
            .sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn get(&self, name: &str) -> Option<Contact> {
        self.track_call("get");
        self.contacts.lock().unwrap().get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.track_call("contains");
        self.contacts.lock().unwrap().contains_key(name)
    }

    fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        self.contacts.lock().unwrap().values().cloned().collect()
    }

    fn create(&mut self, contact: Contact) -> StoreResult<()> {
        self.track_call("create");
        let mut contacts = self.contacts.lock().unwrap();
        let key = contact.name.to_string();
        if contacts.contains_key(&key) {
            return Err(StoreError::DuplicateName(key));
        }
        contacts.insert(key, contact);
        Ok(())
    }

    fn update(&mut self, contact: Contact) -> StoreResult<()> {
        self.track_call("update");
        let mut contacts = self.contacts.lock().unwrap();
        let key = contact.name.to_string();
        match contacts.get_mut(&key) {
            Some(existing) => {
                *existing = contact;
                Ok(())
            }
            None => Err(StoreError::NotFound(key)),
        }
    }

    fn delete(&mut self, name: &str) -> StoreResult<Contact> {
        self.track_call("delete");
        self.contacts
            .lock()
            .unwrap()
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.contacts.lock().unwrap().len()
    }
}
