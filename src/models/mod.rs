//! Data models for the address book.
//!
//! This module contains the data structures representing contact
//! records, the book that owns them, and the derived reminder entries.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::{AddressBook, REMINDER_WINDOW_DAYS};
pub use record::Record;
pub use upcoming::UpcomingBirthday;
