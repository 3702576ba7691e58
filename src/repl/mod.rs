//! The interactive command loop and its dispatcher.
//!
//! Input lines are tokenized on whitespace; the first token, lowercased,
//! selects the command and the rest are positional arguments. Every
//! command is parsed into a [`Command`] first and then executed against
//! the book, so parse errors and execution errors surface through the
//! same [`CommandError`] channel and end up as one printed line each.

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use crate::services;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A fully parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Unknown,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::MissingArgument` when a known command is
    /// given fewer positional arguments than it needs. Extra arguments
    /// are ignored; an unrecognized command word parses to `Unknown`.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Command::Unknown);
        };
        let args: Vec<&str> = parts.collect();

        let command = match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take_args(&args)?;
                Command::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }
            }
            "change" => {
                let [name, old_phone, new_phone] = take_args(&args)?;
                Command::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                }
            }
            "phone" => {
                let [name] = take_args(&args)?;
                Command::Phone {
                    name: name.to_string(),
                }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, date] = take_args(&args)?;
                Command::AddBirthday {
                    name: name.to_string(),
                    date: date.to_string(),
                }
            }
            "show-birthday" => {
                let [name] = take_args(&args)?;
                Command::ShowBirthday {
                    name: name.to_string(),
                }
            }
            "birthdays" => Command::Birthdays,
            "exit" | "close" => Command::Exit,
            _ => Command::Unknown,
        };

        Ok(command)
    }
}

/// First `N` positional arguments, or `MissingArgument` if fewer given.
fn take_args<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArgument);
    }
    let mut taken = [""; N];
    taken.copy_from_slice(&args[..N]);
    Ok(taken)
}

/// Execute one command against the book, evaluating the reminder window
/// relative to `today`.
///
/// `Exit` is the loop's business and dispatches to a farewell here only
/// so every variant has a textual result.
pub fn dispatch(
    command: &Command,
    book: &mut AddressBook,
    today: NaiveDate,
) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => services::add_contact(book, name, phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => services::change_contact(book, name, old_phone, new_phone),
        Command::Phone { name } => services::show_phone(book, name),
        Command::All => Ok(services::show_all(book)),
        Command::AddBirthday { name, date } => services::add_birthday(book, name, date),
        Command::ShowBirthday { name } => services::show_birthday(book, name),
        Command::Birthdays => Ok(services::birthdays(book, today)),
        Command::Exit => Ok("Good bye!".to_string()),
        Command::Unknown => Ok("Invalid command.".to_string()),
    }
}

/// Run the interactive session over arbitrary reader/writer pairs.
///
/// Reads commands until `exit`/`close` or end of input, mutating `book`
/// in place. The caller owns persistence around this call.
pub fn run_session<R: BufRead, W: Write>(
    book: &mut AddressBook,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        // End of input without an explicit exit still ends the session.
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "dispatching");

        if command == Command::Exit {
            break;
        }

        let today = Local::now().date_naive();
        match dispatch(&command, book, today) {
            Ok(message) => writeln!(output, "{}", message)?,
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    writeln!(output, "Good bye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("hello").unwrap(), Command::Hello);
        assert_eq!(Command::parse("all").unwrap(), Command::All);
        assert_eq!(Command::parse("birthdays").unwrap(), Command::Birthdays);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("close").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_lowercases_command_word_only() {
        assert_eq!(Command::parse("HELLO").unwrap(), Command::Hello);
        assert_eq!(
            Command::parse("ADD Tom 1234567890").unwrap(),
            Command::Add {
                name: "Tom".to_string(),
                phone: "1234567890".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Tom 1234567890").unwrap(),
            Command::Add {
                name: "Tom".to_string(),
                phone: "1234567890".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            Command::parse("change Tom 1111111111 2222222222").unwrap(),
            Command::Change {
                name: "Tom".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "2222222222".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        for line in [
            "add",
            "add Tom",
            "change Tom 1111111111",
            "phone",
            "add-birthday Tom",
            "show-birthday",
        ] {
            assert_eq!(
                Command::parse(line).unwrap_err(),
                CommandError::MissingArgument,
                "line: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::parse("frobnicate").unwrap(), Command::Unknown);
        assert_eq!(Command::parse("").unwrap(), Command::Unknown);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            Command::parse("  add   Tom   1234567890  ").unwrap(),
            Command::Add {
                name: "Tom".to_string(),
                phone: "1234567890".to_string(),
            }
        );
    }

    #[test]
    fn test_dispatch_hello() {
        let mut book = AddressBook::new();
        let reply = dispatch(&Command::Hello, &mut book, date(2024, 6, 10)).unwrap();
        assert_eq!(reply, "How can I help you?");
    }

    #[test]
    fn test_dispatch_unknown() {
        let mut book = AddressBook::new();
        let reply = dispatch(&Command::Unknown, &mut book, date(2024, 6, 10)).unwrap();
        assert_eq!(reply, "Invalid command.");
    }

    #[test]
    fn test_dispatch_add_then_phone() {
        let mut book = AddressBook::new();
        let today = date(2024, 6, 10);

        let add = Command::parse("add Tom 1234567890").unwrap();
        assert_eq!(dispatch(&add, &mut book, today).unwrap(), "Contact added.");

        let phone = Command::parse("phone Tom").unwrap();
        assert_eq!(dispatch(&phone, &mut book, today).unwrap(), "1234567890");
    }

    #[test]
    fn test_dispatch_error_surfaces_message() {
        let mut book = AddressBook::new();
        let change = Command::parse("change Ghost 1111111111 2222222222").unwrap();
        let err = dispatch(&change, &mut book, date(2024, 6, 10)).unwrap_err();
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_session_runs_to_exit() {
        let mut book = AddressBook::new();
        let input = b"hello\nadd Tom 1234567890\n\nphone Tom\nexit\n" as &[u8];
        let mut output = Vec::new();

        run_session(&mut book, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        // Drop the inline prompts so the replies line up.
        let text = text.replace("Enter a command: ", "");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Welcome to the assistant bot!",
                "How can I help you?",
                "Contact added.",
                "1234567890",
                "Good bye!"
            ]
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_session_recovers_from_errors() {
        let mut book = AddressBook::new();
        let input = b"add\nchange Ghost 1111111111 2222222222\nnonsense\nclose\n" as &[u8];
        let mut output = Vec::new();

        run_session(&mut book, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Enter the argument for the command."));
        assert!(text.contains("Contact not found."));
        assert!(text.contains("Invalid command."));
        assert!(text.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_session_ends_on_eof() {
        let mut book = AddressBook::new();
        let input = b"hello\n" as &[u8];
        let mut output = Vec::new();

        run_session(&mut book, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Good bye!\n"));
    }
}
