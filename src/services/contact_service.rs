//! Contact workflow layer.
//!
//! Business logic sitting between the command dispatcher and the data
//! model: each function takes the book explicitly, validates, mutates,
//! and returns the line the user should see. Errors are returned as
//! [`CommandError`] values; nothing here prints or panics.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Add a phone to a contact, creating the contact if needed.
///
/// The phone is appended only if the record does not already hold an
/// equal number; re-adding an existing phone is a silent no-op. This
/// dedup is a business rule of the add workflow, not of [`Record`]
/// itself.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name));
        "Contact added."
    };

    // Just inserted or just found, the lookup cannot miss.
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    if record.find_phone(phone).is_none() {
        record.add_phone(phone)?;
    }

    Ok(message.to_string())
}

/// Replace one of a contact's phones.
///
/// # Errors
///
/// `ContactNotFound` if the name is absent, plus whatever
/// [`Record::edit_phone`] reports.
pub fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone updated.".to_string())
}

/// List a contact's phones, "; "-joined.
pub fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    if record.phones().is_empty() {
        return Ok("No phone numbers.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; "))
}

/// Render the whole book.
pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

/// Set a contact's birthday.
pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<String> {
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// Show a contact's birthday as DD.MM.YYYY.
pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    match record.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("Birthday not set.".to_string()),
    }
}

/// Render the upcoming-birthday reminders for the week starting at
/// `today`, one "{name}: {date}" line per contact.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays in the next 7 days.".to_string();
    }
    upcoming
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
