//! Persistence adapter for the address book.
//!
//! The whole book is serialized as one JSON document to a fixed path.
//! The format is implementation-internal: it is not meant to be
//! hand-edited or shared across incompatible versions. Saves are
//! atomic (write to a temp file in the same directory, then rename)
//! so a crash mid-save never corrupts the previous state.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// File-backed storage for a single address book.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a storage adapter for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book from disk.
    ///
    /// A missing file is not an error: the first session of a fresh
    /// install starts with an empty book.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` for unreadable files and
    /// `StorageError::Decode` when the file exists but does not parse.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "book file absent, starting empty");
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            records = book.len(),
            "address book loaded"
        );
        Ok(book)
    }

    /// Save the book to disk atomically.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // The temp file must live in the target directory for the
        // rename to stay on one filesystem.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, book)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;

        debug!(
            path = %self.path.display(),
            records = book.len(),
            "address book saved"
        );
        Ok(())
    }
}
