//! The address book: all records, keyed by contact name.

use crate::error::{CommandError, CommandResult};
use crate::models::{Record, UpcomingBirthday};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many days ahead the reminder query looks, today included.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// The collection of all contact records.
///
/// Names are unique; a record inserted under an existing name replaces
/// the old one in place. Records are stored in insertion order and all
/// iteration (listing, reminders, serialization) follows that order.
///
/// The book deliberately exposes only the operations below rather than
/// a generic map surface, so every insert goes through a path that
/// keeps the name-uniqueness invariant.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any existing record with the same name.
    ///
    /// A replaced record keeps its original position; a new name goes to
    /// the end.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by name. A miss is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record with the given name.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::ContactNotFound` if the name is absent.
    pub fn delete(&mut self, name: &str) -> CommandResult<()> {
        let index = self.position(name).ok_or(CommandError::ContactNotFound)?;
        self.records.remove(index);
        Ok(())
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contacts whose birthday occurs within the next
    /// [`REMINDER_WINDOW_DAYS`] days of `today`, today included.
    ///
    /// For each record with a birthday, the occurrence is the birthday's
    /// (day, month) in `today`'s year, rolled to next year when it has
    /// already passed. Occurrences landing on Saturday or Sunday are
    /// shifted to the following Monday. Output order is the book's
    /// insertion order.
    ///
    /// A Feb 29 birthday projected onto a non-leap year clamps to Feb 28.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut occurrence = occurrence_in_year(birthday.date(), today.year())?;

                if occurrence < today {
                    occurrence = occurrence_in_year(birthday.date(), today.year() + 1)?;
                }

                let delta = (occurrence - today).num_days();
                if !(0..=REMINDER_WINDOW_DAYS).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: shift_off_weekend(occurrence),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// Project a birthday onto `year`, clamping Feb 29 to Feb 28 when the
/// target year is not a leap year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Move Saturday/Sunday dates to the following Monday; weekdays pass
/// through unchanged.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let from_monday = date.weekday().num_days_from_monday() as u64;
    if from_monday >= 5 {
        date.checked_add_days(Days::new(7 - from_monday)).unwrap_or(date)
    } else {
        date
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty.");
        }
        let rendered = self
            .records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", rendered)
    }
}
