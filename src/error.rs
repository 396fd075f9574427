//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Expected conditions (a missing contact or phone) are ordinary error values whose
//! `Display` text is the message shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// An input value failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under this name
    #[error("Contact {0} not found in the address book!")]
    ContactNotFound(String),

    /// The contact exists but does not have this phone number
    #[error("Phone number {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The contact already has the phone number an edit would introduce
    #[error("Phone already in list")]
    DuplicatePhone { name: String, phone: String },
}

impl BookError {
    /// Whether this error describes a missing contact or phone.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ContactNotFound(_) | Self::PhoneNotFound { .. }
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while turning a line of input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command needs more arguments than were given
    #[error("Not enough params. Print help")]
    NotEnoughParams {
        command: &'static str,
        expected: usize,
    },

    /// The command was given more arguments than it accepts
    #[error("Too many params. Print help")]
    TooManyParams { command: &'static str, max: usize },

    /// No keyword matched the input
    #[error("Unknown command, try again!")]
    Unknown(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
