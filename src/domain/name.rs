//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The name is trimmed and validated at construction time. It is immutable
/// once built and serves as the unique key for a contact in the address book.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("  John Doe  ").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting empty or all-whitespace input.
    ///
    /// Surrounding whitespace is stripped; the trimmed string is what gets
    /// stored and displayed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if nothing remains after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Anna Smith").unwrap();
        assert_eq!(name.as_str(), "Anna Smith");
    }

    #[test]
    fn test_name_trims_whitespace() {
        let name = Name::new("  Anna  ").unwrap();
        assert_eq!(name.as_str(), "Anna");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("   "), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Anna").unwrap();
        assert_eq!(format!("{}", name), "Anna");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Anna").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Anna\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
