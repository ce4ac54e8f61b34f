use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::BookError;

/// In-memory documents keyed by path.
///
/// Useful for embedding the book somewhere without a filesystem and for tests.
/// A read-only store rejects every write with `PermissionDenied`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    documents: HashMap<PathBuf, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any existing one at `path`
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn document(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.documents.get(path.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<String, BookError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| BookError::NotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<(), BookError> {
        if self.read_only {
            return Err(BookError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "storage is read-only"),
            });
        }
        self.documents.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}
