//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every record for the lifetime of the process.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use record::Record;
