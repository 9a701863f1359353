//! The address book: a keyed collection of contact records.

use crate::domain::DATE_FORMAT;
use crate::error::{ContactError, ContactResult};
use crate::models::{BirthdayReminder, Record};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::collections::HashMap;
use tracing::debug;

/// Default number of days ahead considered "upcoming" for birthday reminders.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// In-memory store of contacts keyed by name.
///
/// The mapping is private; all access goes through the sanctioned operations
/// below. Invariant: every record sits under the key equal to its own name,
/// which `add` maintains by deriving the key from the record itself.
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, silently replacing any existing
    /// record stored under the same name (upsert).
    pub fn add(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup with mutable access.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a contact by name.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::ContactNotFound` if the name is absent.
    pub fn delete(&mut self, name: &str) -> ContactResult<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays falling within `window_days` of today (local date).
    pub fn upcoming_birthdays(&self, window_days: i64) -> Vec<BirthdayReminder> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Birthdays falling within `window_days` of an explicit reference date.
    ///
    /// Each birthday's month and day are projected onto the reference year;
    /// birthdays that already passed roll forward one year. A record is kept
    /// when its day-offset from `today` lies in `[0, window_days]`. Projected
    /// dates on Saturday shift forward 2 days and on Sunday 1 day, so the
    /// congratulation date always lands on a weekday.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<BirthdayReminder> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut next = project_to_year(birthday.date(), today.year());
            if next < today {
                next = project_to_year(birthday.date(), today.year() + 1);
            }

            let days_until = (next - today).num_days();
            if (0..=window_days).contains(&days_until) {
                let congratulation = shift_off_weekend(next);
                upcoming.push(BirthdayReminder {
                    name: record.name().as_str().to_string(),
                    congratulation_date: congratulation.format(DATE_FORMAT).to_string(),
                });
            }
        }

        debug!(
            count = upcoming.len(),
            window_days, "computed upcoming birthdays"
        );
        upcoming
    }

    /// Find records whose name contains `query` case-insensitively, or whose
    /// phone strings contain `query` exactly (case-sensitive). Each record
    /// appears at most once even if several of its phones match.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();

        self.records
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query_lower)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(query))
            })
            .collect()
    }
}

/// Move a birthday's month and day into `year`. A Feb 29 birthday lands on
/// Mar 1 when `year` is not a leap year.
fn project_to_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

/// Shift a weekend date forward to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
