//! Data structures for contacts and birthday reminders.

pub mod record;
pub mod reminder;

pub use record::Record;
pub use reminder::BirthdayReminder;
