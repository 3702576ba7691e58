//! Assistant bot - Main entry point
//!
//! Wires configuration, storage, and the interactive loop together:
//! load the book once at startup, run the session, save once at exit.

use anyhow::Result;
use assistant_bot::{repl, AddressBook, Config, Storage};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter.
    let config = Config::from_env()?;

    // Logging goes to stderr only; stdout belongs to the session.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let storage = Storage::new(&config.book_path);
    let mut book = match storage.load() {
        Ok(book) => {
            info!(records = book.len(), "address book loaded");
            book
        }
        Err(err) => {
            // A broken book file must not take the session down.
            warn!(
                path = %storage.path().display(),
                error = %err,
                "failed to load address book, starting empty"
            );
            AddressBook::new()
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run_session(&mut book, stdin.lock(), &mut stdout)?;

    storage.save(&book)?;
    info!(records = book.len(), "address book saved");

    Ok(())
}
