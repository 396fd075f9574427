//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of: its
//! name, its phone numbers and its birthday. Each one checks its value at
//! construction time so an invalid value can never be stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, FieldKind, MIN_BIRTHDAY_YEAR};
pub use name::Name;
pub use phone::Phone;
