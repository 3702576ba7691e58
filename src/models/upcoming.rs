//! Upcoming-birthday reminder entry.

use crate::domain::DATE_FORMAT;
use chrono::NaiveDate;
use std::fmt;

/// One entry of the birthday-reminder query: who to congratulate and on
/// which day. The date is the celebration date, i.e. the birthday's
/// occurrence this year already shifted off a weekend. Derived on
/// demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}
