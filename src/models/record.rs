//! Contact record: one person's name, phones, and optional birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact.
///
/// Owns exactly one immutable [`Name`], an ordered list of [`Phone`] values
/// (duplicates allowed), and at most one [`Birthday`]. Mutation goes through
/// the methods below so every stored field stays validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a validated name and no phones or birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for empty or all-whitespace input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. No uniqueness check; the same number may
    /// appear more than once.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for a non-10-digit value.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone whose stored string equals `value` exactly.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| ContactError::PhoneNotFound(value.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new` value,
    /// preserving its position. A failed edit leaves the list untouched.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if `old` is absent, or
    /// `ContactError::Validation` if `new` is not a legal phone.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    /// Find the first phone whose stored string equals `value` exactly.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Validate and set the birthday, silently replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed input.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("John Doe").unwrap();
        assert_eq!(record.name().as_str(), "John Doe");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        assert!(Record::new("   ").is_err());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = Record::new("John").unwrap();
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_first_occurrence() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0509876543").unwrap();
        record.add_phone("0501234567").unwrap();

        record.remove_phone("0501234567").unwrap();
        let remaining: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(remaining, vec!["0509876543", "0501234567"]);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();
        assert_eq!(
            record.remove_phone("0000000000"),
            Err(ContactError::PhoneNotFound("0000000000".to_string()))
        );
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501111111").unwrap();
        record.add_phone("0502222222").unwrap();
        record.add_phone("0503333333").unwrap();

        record.edit_phone("0502222222", "0509999999").unwrap();
        let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0501111111", "0509999999", "0503333333"]);
    }

    #[test]
    fn test_edit_phone_missing_leaves_record_untouched() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();

        let result = record.edit_phone("0000000000", "0509999999");
        assert_eq!(
            result,
            Err(ContactError::PhoneNotFound("0000000000".to_string()))
        );
        assert_eq!(record.phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn test_edit_phone_invalid_new_value_leaves_record_untouched() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();

        let result = record.edit_phone("0501234567", "123");
        assert!(matches!(result, Err(ContactError::Validation(_))));
        assert_eq!(record.phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();

        assert_eq!(
            record.find_phone("0501234567").map(Phone::as_str),
            Some("0501234567")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday_replaces_silently() {
        let mut record = Record::new("John").unwrap();
        record.set_birthday("15.06.1990").unwrap();
        record.set_birthday("01.01.2000").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.2000");
    }

    #[test]
    fn test_display_without_birthday() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0509876543").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 0501234567; 0509876543"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();
        record.set_birthday("15.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 0501234567, birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("0501234567").unwrap();
        record.set_birthday("15.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
