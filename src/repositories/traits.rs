use crate::error::StoreResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage keyed by contact name,
/// enabling different implementations (in-memory, mock).
pub trait ContactRepository {
    /// Retrieve a single contact by name.
    fn get(&self, name: &str) -> Option<Contact>;

    /// Check whether a contact with this name is stored.
    fn contains(&self, name: &str) -> bool;

    /// Retrieve every contact in the repository's iteration order.
    fn list(&self) -> Vec<Contact>;

    /// Store a new contact. Fails with `DuplicateName` if the name is taken.
    fn create(&mut self, contact: Contact) -> StoreResult<()>;

    /// Replace an existing contact. Fails with `NotFound` if the name is absent.
    fn update(&mut self, contact: Contact) -> StoreResult<()>;

    /// Remove a contact, returning it. Fails with `NotFound` if the name is absent.
    fn delete(&mut self, name: &str) -> StoreResult<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
