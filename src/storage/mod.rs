mod book_file;
mod file;
mod memory;

pub use book_file::BookFile;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::{Path, PathBuf};

use crate::error::BookError;

/// Suffix inserted into the book path to name the favourites document
pub const FAVOURITE_SUFFIX: &str = "(favourite)";

/// Raw text storage behind a recipe book.
///
/// Reads and writes are whole-document: a write either replaces the text at
/// `path` or fails.
pub trait Storage {
    /// Returns `BookError::NotFound` when nothing is stored at `path`
    fn read(&self, path: &Path) -> Result<String, BookError>;

    fn write(&mut self, path: &Path, text: &str) -> Result<(), BookError>;
}

/// Path of the favourites document derived from a book path.
///
/// The suffix goes before the first `.` of the file name, so `book.txt` becomes
/// `book(favourite).txt` and `book.backup.txt` becomes `book(favourite).backup.txt`.
/// A file name with no `.` gets the suffix appended. The directory part is kept
/// as is.
pub fn favourites_path(path: &Path) -> PathBuf {
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return PathBuf::from(format!("{}{FAVOURITE_SUFFIX}", path.display())),
    };
    let favourite_name = match file_name.split_once('.') {
        Some((stem, rest)) => format!("{stem}{FAVOURITE_SUFFIX}.{rest}"),
        None => format!("{file_name}{FAVOURITE_SUFFIX}"),
    };
    path.with_file_name(favourite_name)
}
