//! Upcoming-birthday reminder entry.

use serde::{Deserialize, Serialize};

/// One row of an upcoming-birthday report: who to congratulate and when.
///
/// The congratulation date is the projected birthday shifted off the weekend
/// where needed, formatted `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayReminder {
    /// Contact's name
    pub name: String,

    /// Congratulation date formatted DD.MM.YYYY
    pub congratulation_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_serialization() {
        let reminder = BirthdayReminder {
            name: "John".to_string(),
            congratulation_date: "17.06.2024".to_string(),
        };
        let json = serde_json::to_string(&reminder).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John","congratulation_date":"17.06.2024"}"#
        );
    }
}
