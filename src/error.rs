//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of store and driver errors is exactly what the console prints.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors reported by contact store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A contact with this name is already stored
    #[error("{0} already exists!")]
    DuplicateName(String),

    /// No contact with this name is stored
    #[error("{0} not found!")]
    NotFound(String),

    /// The contact name was empty
    #[error("Contact name cannot be empty")]
    EmptyName,
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => StoreError::EmptyName,
        }
    }
}

/// Errors raised by the console driver while interpreting user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// The menu selection was not one of the recognised tokens
    #[error("Please enter a valid choice!")]
    InvalidMenuChoice(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
