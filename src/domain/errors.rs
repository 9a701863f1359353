//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or all whitespace.
    EmptyName,

    /// The provided phone number does not contain exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real calendar date in DD.MM.YYYY form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number (must contain exactly 10 digits): {}",
                phone
            ),
            Self::InvalidBirthday(value) => {
                write!(f, "Invalid date: {} (expected DD.MM.YYYY)", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
