//! Command handlers: the operation contracts between the interactive loop
//! and the address book.
//!
//! Each handler takes already-tokenized arguments plus the book, performs one
//! store operation, and returns a human-readable result string. Errors come
//! back typed; the loop boundary turns them into one-line messages. A failed
//! handler never leaves a partial mutation behind.

use crate::error::{CommandError, CommandResult, ContactError};
use crate::models::Record;
use crate::store::AddressBook;

/// `add <name> <phone>`: create the contact if absent, then append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InvalidArguments(
            "Give me name and phone please.".to_string(),
        ));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    // Validate the phone before the record enters the book, so a bad phone
    // does not leave an empty contact behind.
    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone)?;
    book.add(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: edit a phone on an existing contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::InvalidArguments(
            "Give me name, old phone and new phone please.".to_string(),
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show a contact's phone numbers.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidArguments(
            "Give me a name please.".to_string(),
        ));
    };

    let record = book
        .find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;

    if record.phones().is_empty() {
        Ok("No phone numbers found for this contact.".to_string())
    } else {
        Ok(record
            .phones()
            .iter()
            .map(|phone| phone.as_str())
            .collect::<Vec<_>>()
            .join("; "))
    }
}

/// `all`: render every contact, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::InvalidArguments(
            "Give me name and birthday please.".to_string(),
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: show a contact's birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidArguments(
            "Give me a name please.".to_string(),
        ));
    };

    let record = book
        .find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;

    match record.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("No birthday found for this contact.".to_string()),
    }
}

/// `birthdays`: list congratulation dates within the window.
pub fn birthdays(book: &AddressBook, window_days: i64) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(window_days);

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(
        upcoming
            .iter()
            .map(|reminder| format!("{}: {}", reminder.name, reminder.congratulation_date)),
    );
    Ok(lines.join("\n"))
}

/// `search <query>`: find contacts by name or phone substring.
pub fn search_contacts(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [query, ..] = args else {
        return Err(CommandError::InvalidArguments(
            "Enter search query".to_string(),
        ));
    };

    let results = book.search(query);
    if results.is_empty() {
        return Ok(format!("No contacts found matching '{}'", query));
    }

    let mut lines = vec![format!(
        "Found {} contact(s) matching '{}':",
        results.len(),
        query
    )];
    lines.extend(results.iter().map(|record| record.to_string()));
    Ok(lines.join("\n"))
}

/// `remove-phone <name> <phone>`: remove one phone occurrence from a contact.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InvalidArguments(
            "Give me name and phone please.".to_string(),
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
    record.remove_phone(phone)?;
    Ok(format!("Phone {} removed from {}", phone, name))
}
