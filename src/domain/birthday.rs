//! Birthday value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A birthday given as an ISO `YYYY-MM-DD` date.
///
/// The year must lie between 1900 and the current year inclusive.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-17").unwrap();
/// assert_eq!(birthday.as_str(), "1990-05-17");
/// assert!(Birthday::new("17.05.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    date: NaiveDate,
    value: String,
}

impl Birthday {
    /// Create a new Birthday, validating format and year range against today.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for a malformed or
    /// impossible date and `ValidationError::BirthdayYearOutOfRange` for a
    /// year outside `1900..=current year`.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::new_as_of(raw, Local::now().date_naive())
    }

    /// Like [`Birthday::new`], but with an explicit reference date for the
    /// upper year bound.
    pub fn new_as_of(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let value = Self::KIND.validate_as_of(raw, today)?;
        let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;
        Ok(Self { date, value })
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the ISO-formatted birthday.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Field for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn as_str(&self) -> &str {
        &self.value
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
