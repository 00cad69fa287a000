//! Domain value objects and types.
//!
//! Type-safe wrappers for domain concepts. Value objects validate at
//! construction time so invalid data cannot be represented in the store.

pub mod contact_name;
pub mod errors;

pub use contact_name::ContactName;
pub use errors::ValidationError;
