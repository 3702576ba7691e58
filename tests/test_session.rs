//! Full-session tests: scripted input through the dispatcher loop.

use assistant_bot::{repl, AddressBook};

fn run(book: &mut AddressBook, script: &str) -> String {
    let mut output = Vec::new();
    repl::run_session(book, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .replace("Enter a command: ", "")
}

#[test]
fn test_scripted_session() {
    let mut book = AddressBook::new();
    let output = run(
        &mut book,
        "hello\n\
         add Tom 1234567890\n\
         add Tom 1234567890\n\
         add-birthday Tom 15.06.1985\n\
         show-birthday Tom\n\
         phone Tom\n\
         all\n\
         exit\n",
    );

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Birthday added.",
            "15.06.1985",
            "1234567890",
            "Name: Tom, Phones: 1234567890, Birthday: 15.06.1985",
            "Good bye!"
        ]
    );

    // The duplicate add left a single phone behind.
    assert_eq!(book.find("Tom").unwrap().phones().len(), 1);
}

#[test]
fn test_errors_do_not_end_the_session() {
    let mut book = AddressBook::new();
    let output = run(
        &mut book,
        "add Tom 123\n\
         change Ghost 1111111111 2222222222\n\
         phone Nobody\n\
         add-birthday Tom 1985-06-15\n\
         add\n\
         blargh\n\
         hello\n\
         close\n",
    );

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "Welcome to the assistant bot!",
            "Phone number must contain 10 digits.",
            "Contact not found.",
            "Contact not found.",
            "Invalid date format. Use DD.MM.YYYY",
            "Enter the argument for the command.",
            "Invalid command.",
            "How can I help you?",
            "Good bye!"
        ]
    );
}

#[test]
fn test_blank_lines_are_skipped() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "\n   \nhello\nexit\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        ["Welcome to the assistant bot!", "How can I help you?", "Good bye!"]
    );
}

#[test]
fn test_command_word_is_case_insensitive() {
    let mut book = AddressBook::new();
    let output = run(&mut book, "ADD Tom 1234567890\nPHONE Tom\nEXIT\n");
    assert!(output.contains("Contact added."));
    assert!(output.contains("1234567890"));

    // The contact name keeps its original case.
    assert!(book.find("Tom").is_some());
    assert!(book.find("tom").is_none());
}
