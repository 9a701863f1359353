//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for parsing and display: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Fixed-width shape check applied before calendar parsing. chrono alone
/// would accept single-digit days, which the input format forbids.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date pattern is valid"));

/// A type-safe wrapper for birthday dates.
///
/// Constructed only from strings matching `DD.MM.YYYY` that name a real
/// calendar date. Immutable once built; formats back to the exact input
/// string.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the string does not
    /// match the two-digit/two-digit/four-digit shape, or when the groups do
    /// not form a real calendar date (e.g. `30.02.2020`).
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !DATE_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
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
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
