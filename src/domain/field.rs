//! The shared `Field` capability and the validators behind it.
//!
//! Every validated value in a contact (its name, its phones, its birthday)
//! is a [`Field`]. The rule a field enforces is selected by its
//! [`FieldKind`], so callers never inspect types at runtime to decide how a
//! value should be checked.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Strict `YYYY-MM-DD` shape. chrono alone accepts unpadded months and days.
static ISO_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile ISO date regex"));

/// Earliest birthday year accepted.
pub const MIN_BIRTHDAY_YEAR: i32 = 1900;

/// The validation rule a field is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Any non-blank string.
    Name,
    /// ASCII digits only, at least one.
    Phone,
    /// ISO calendar date with a year in `1900..=current year`.
    Birthday,
}

impl FieldKind {
    /// Validate `raw` against this kind's rule, returning the canonical value.
    pub fn validate(self, raw: &str) -> Result<String, ValidationError> {
        self.validate_as_of(raw, Local::now().date_naive())
    }

    /// Like [`FieldKind::validate`], with `today` bounding the birthday year.
    pub fn validate_as_of(self, raw: &str, today: NaiveDate) -> Result<String, ValidationError> {
        match self {
            Self::Name => validate_name(raw),
            Self::Phone => validate_phone(raw),
            Self::Birthday => parse_birthday(raw, today).map(format_iso),
        }
    }

    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated, string-shaped value.
///
/// Implementors guarantee that [`Field::as_str`] always returns a value that
/// satisfies [`Field::KIND`]'s rule.
pub trait Field: fmt::Display + Sized {
    /// The rule this field enforces.
    const KIND: FieldKind;

    /// Build the field from raw input.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The canonical value.
    fn as_str(&self) -> &str;

    /// Replace the value, re-validating exactly like construction.
    ///
    /// On failure the previous value is kept.
    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}

fn validate_name(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(raw.to_string())
}

fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone(raw.to_string()));
    }
    Ok(raw.to_string())
}

/// Parse a birthday, taking the upper year bound from `today`.
fn parse_birthday(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !ISO_DATE_REGEX.is_match(raw) {
        return Err(ValidationError::InvalidBirthday(raw.to_string()));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;

    let max = today.year();
    if !(MIN_BIRTHDAY_YEAR..=max).contains(&date.year()) {
        return Err(ValidationError::BirthdayYearOutOfRange {
            year: date.year(),
            max,
        });
    }

    Ok(date)
}

fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
