//! The address book: every contact keyed by name, listed page by page.

use super::record::Record;
use crate::error::{BookError, BookResult};
use std::collections::HashMap;
use std::slice::Chunks;

/// Number of records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A keyed collection of contact records.
///
/// Records are keyed by their name and enumerated in insertion order.
/// Replacing a record under an existing name keeps that name's position.
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
    page_size: usize,
}

impl AddressBook {
    /// Create an empty book with [`DEFAULT_PAGE_SIZE`].
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty book with a custom page size. Zero is raised to one.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            page_size: page_size.max(1),
        }
    }

    /// Records per page in [`AddressBook::pages`].
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a contact is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// The record stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to the record stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Store a record under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) -> String {
        let key = record.name().as_str().to_string();
        let message = format!("Contact {} added to the address book!", key);

        if self.records.insert(key.clone(), record).is_some() {
            tracing::info!(contact = %key, "Replaced existing contact");
        } else {
            tracing::info!(contact = %key, "Added contact");
            self.order.push(key);
        }

        message
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` and leaves the book unchanged if
    /// there is no such contact.
    pub fn remove_record(&mut self, name: &str) -> BookResult<String> {
        if self.records.remove(name).is_none() {
            return Err(BookError::ContactNotFound(name.to_string()));
        }
        self.order.retain(|key| key != name);

        tracing::info!(contact = %name, "Removed contact");
        Ok(format!("Contact {} removed from the address book!", name))
    }

    /// Render the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such contact.
    pub fn find_record(&self, name: &str) -> BookResult<String> {
        self.records
            .get(name)
            .map(ToString::to_string)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Number of pages a full listing takes.
    pub fn page_count(&self) -> usize {
        self.len().div_ceil(self.page_size)
    }

    /// Lazily render the book one page at a time, in insertion order.
    ///
    /// Every page holds `page_size` rendered records except possibly the last.
    /// Each call starts a fresh pass over the current contents.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            chunks: self.order.chunks(self.page_size),
            records: &self.records,
        }
    }

    /// Lazily render every record, in insertion order.
    pub fn iter_rendered(&self) -> impl Iterator<Item = String> + '_ {
        self.pages().flatten()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over rendered pages of an [`AddressBook`].
#[derive(Debug)]
pub struct Pages<'a> {
    chunks: Chunks<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl Iterator for Pages<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let keys = self.chunks.next()?;
        Some(
            keys.iter()
                .filter_map(|key| self.records.get(key))
                .map(ToString::to_string)
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
