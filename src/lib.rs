//! Contact Book - an interactive command-line contact manager.
//!
//! This library stores named contacts, each with a set of phone numbers and
//! an optional birthday, and exposes the operations a text shell needs to
//! add, edit, remove and list them.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday) and their rules
//! - **models**: Contact records and the address book that owns them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **shell**: Command parsing and the read/eval/print loop

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Birthday, Field, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, CommandError, ConfigError};
pub use models::{AddressBook, Pages, Record, DEFAULT_PAGE_SIZE};
pub use shell::{Command, Reply};
