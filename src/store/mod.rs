//! In-memory contact store.

pub mod address_book;

pub use address_book::{AddressBook, DEFAULT_UPCOMING_DAYS};
