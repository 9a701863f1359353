//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is valid when its digit characters, ignoring any
/// separators, number exactly 10. The original string is what gets stored
/// and displayed, separators included.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("050-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "050-123-4567");
/// assert_eq!(phone.digits(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless exactly 10 decimal
    /// digits remain after stripping non-digit characters.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate that the string carries exactly 10 digits.
    fn is_valid(phone: &str) -> bool {
        phone.chars().filter(|c| c.is_ascii_digit()).count() == 10
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
