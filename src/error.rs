//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur in record and store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced contact does not exist
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    /// Referenced phone does not exist on the contact
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

/// Errors surfaced at the command-handler boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A record or store operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Wrong number of tokens supplied to a command
    #[error("{0}")]
    InvalidArguments(String),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Contact(ContactError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
