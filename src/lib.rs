//! Contact Book - an interactive command-line address book with birthday
//! reminders.
//!
//! Contacts live in an in-memory store keyed by name. Each contact carries a
//! validated name, any number of 10-digit phone numbers, and an optional
//! `DD.MM.YYYY` birthday. The store answers exact lookups, substring search,
//! and upcoming-birthday queries with weekend-shifted congratulation dates.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record and birthday reminder structures
//! - **store**: the address book with search and birthday-window computation
//! - **commands**: input tokenizing and the command handlers
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ContactError, ContactResult};
pub use models::{BirthdayReminder, Record};
pub use store::{AddressBook, DEFAULT_UPCOMING_DAYS};
