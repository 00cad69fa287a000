//! Contact Book - an in-memory contact directory driven from a console menu.
//!
//! Contacts are identified by name and carry a phone number, an email and
//! free-form additional information. Nothing is persisted; the store lives
//! for the lifetime of the process.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact names)
//! - **models**: The contact record
//! - **repositories**: Storage abstraction and the in-memory implementation
//! - **services**: Contact store operations (add, view, search, update, delete)
//! - **presentation**: Plain-text table rendering
//! - **cli**: Menu and console driver loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod presentation;
pub mod repositories;
pub mod services;

pub use cli::{ConsoleDriver, MenuChoice};
pub use config::Config;
pub use error::{ConfigError, DriverError, StoreError, StoreResult};
pub use models::Contact;
pub use presentation::{Table, TableStyle};
pub use services::{ContactStore, ContactUpdate};
