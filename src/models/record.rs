//! A single contact's record: name, phone numbers, optional birthday.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact in the address book.
///
/// A record is created with a name only; phones and the birthday are
/// attached afterwards through the mutation methods, all of which
/// validate their input before touching any state. Phones keep
/// insertion order; the record itself never deduplicates them (that is
/// the workflow layer's rule, see [`crate::services`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name, the record's identity within a book.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidPhoneFormat` if `raw` is not a
    /// 10-digit number.
    pub fn add_phone(&mut self, raw: &str) -> CommandResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or(CommandError::PhoneNotFound)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// The new value is validated before the list is searched, so a
    /// failed edit leaves the phone list untouched.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidPhoneFormat` if `new` is invalid,
    /// `CommandError::PhoneNotFound` if `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or(CommandError::PhoneNotFound)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Look up a phone by value. A miss is not an error.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate `raw` and set (or overwrite) the birthday.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidDateFormat` if `raw` is not a real
    /// calendar date in DD.MM.YYYY form.
    pub fn set_birthday(&mut self, raw: &str) -> CommandResult<()> {
        let birthday: Birthday = raw.parse()?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Name: {}, Phones: {}, Birthday: ", self.name, phones)?;
        match self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "—"),
        }
    }
}
