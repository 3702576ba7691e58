//! Assistant bot - an interactive command-line contact manager.
//!
//! Stores names, phone numbers, and birthdays, persists them between
//! sessions, and computes upcoming-birthday reminders with
//! weekend-shift logic.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: Record, AddressBook, and the derived reminder entries
//! - **services**: Workflow operations the commands map onto
//! - **storage**: JSON persistence with atomic saves
//! - **repl**: Command parsing and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod services;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repl::Command;
pub use storage::Storage;
