//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number contains something other than digits.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),

    /// The birthday parsed, but its year is outside `1900..=max`.
    BirthdayYearOutOfRange { year: i32, max: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {} (phone number must be a string of digits only)",
                phone
            ),
            Self::InvalidBirthday(value) => write!(
                f,
                "Invalid birthday: {} (use ISO format YYYY-MM-DD)",
                value
            ),
            Self::BirthdayYearOutOfRange { year, max } => write!(
                f,
                "Invalid birthday year: {} (must be between 1900 and {})",
                year, max
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
