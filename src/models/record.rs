//! Record model representing one contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A contact: a name, a set of phone numbers and an optional birthday.
///
/// The name is the record's identity and never changes. Phones behave as a
/// set, so adding a number twice keeps a single copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: BTreeSet<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: BTreeSet::new(),
            birthday: None,
        }
    }

    /// Builder-style initial phone.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.insert(phone);
        self
    }

    /// Builder-style initial birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// The contact's name, which is also its address book key.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in ascending order.
    pub fn phones(&self) -> impl Iterator<Item = &Phone> + '_ {
        self.phones.iter()
    }

    /// Number of distinct phones.
    pub fn phone_count(&self) -> usize {
        self.phones.len()
    }

    /// Whether `raw` is one of this contact's phones.
    pub fn has_phone(&self, raw: &str) -> bool {
        self.phones.iter().any(|phone| phone.as_str() == raw)
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and add a phone number. Adding a number already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `raw` is not a valid phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<String, ValidationError> {
        let phone = Phone::new(raw)?;
        let inserted = self.phones.insert(phone);
        tracing::debug!(contact = %self.name, phone = raw, inserted, "add_phone");
        Ok(format!("Phone {} added to contact {}", raw, self.name))
    }

    /// Remove a phone number if the contact has it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` and leaves the record unchanged if
    /// the number is absent.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<String> {
        if !self.has_phone(raw) {
            return Err(self.phone_not_found(raw));
        }
        self.phones.retain(|phone| phone.as_str() != raw);
        tracing::debug!(contact = %self.name, phone = raw, "remove_phone");
        Ok(format!("Phone {} removed from contact {}", raw, self.name))
    }

    /// Replace `old` with `new`.
    ///
    /// Every phone is checked for `old` before the number is reported
    /// missing. Replacing a number with itself is a no-op.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` when `old` is absent
    /// - `BookError::Validation` when `new` is not a valid phone number
    /// - `BookError::DuplicatePhone` when `new` is already another of the
    ///   contact's phones
    ///
    /// In every case the record is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<String> {
        let existing = self
            .phones
            .iter()
            .find(|phone| phone.as_str() == old)
            .cloned()
            .ok_or_else(|| self.phone_not_found(old))?;

        let replacement = Phone::new(new)?;
        if replacement != existing && self.phones.contains(&replacement) {
            return Err(BookError::DuplicatePhone {
                name: self.name.to_string(),
                phone: new.to_string(),
            });
        }

        self.phones.remove(&existing);
        self.phones.insert(replacement);

        tracing::debug!(contact = %self.name, old, new, "edit_phone");
        Ok(format!(
            "Phone number {} updated to {} for contact {}",
            old, new, self.name
        ))
    }

    /// Validate and store a birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `raw` is not an acceptable birthday; the
    /// previous birthday is kept in that case.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "set_birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next birthday counted from today, `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, `0` when it is today.
    ///
    /// A 29 February birthday is celebrated on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();

        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    fn phone_not_found(&self, raw: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: raw.to_string(),
        }
    }
}

/// The birthday `born` falls on in `year`, clamping 29 February to the 28th.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    born.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Name: {}\nPhones: {}", self.name, phones.join(", "))?;
        if let Some(ref birthday) = self.birthday {
            write!(f, "\nBirthday: {}", birthday)?;
        }
        Ok(())
    }
}
