//! Service layer for contact book operations.

pub mod contact_store;

pub use contact_store::{ContactStore, ContactUpdate, ADDITIONAL_INFORMATION_KEY};
