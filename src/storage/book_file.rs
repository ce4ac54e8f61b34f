use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::{favourites_path, FileStorage, Storage};
use crate::book::RecipeBook;
use crate::config::BookConfig;
use crate::error::{BookError, ParseError};
use crate::format::{parse_document, serialize_document};

/// A recipe book document together with its derived favourites document.
///
/// The book document holds every recipe; the favourites document holds only the
/// favourite ones and is rewritten on every save.
#[derive(Debug, Clone)]
pub struct BookFile<S = FileStorage> {
    path: PathBuf,
    storage: S,
    write_favourites: bool,
    restore_favourites: bool,
}

impl BookFile<FileStorage> {
    /// A book document on the local filesystem
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(path, FileStorage)
    }

    /// A filesystem book using the flags from `config`
    pub fn from_config(path: impl Into<PathBuf>, config: &BookConfig) -> Self {
        Self::open(path)
            .write_favourites(config.write_favourites)
            .restore_favourites(config.restore_favourites)
    }
}

impl<S: Storage> BookFile<S> {
    pub fn with_storage(path: impl Into<PathBuf>, storage: S) -> Self {
        BookFile {
            path: path.into(),
            storage,
            write_favourites: true,
            restore_favourites: true,
        }
    }

    pub fn write_favourites(mut self, enabled: bool) -> Self {
        self.write_favourites = enabled;
        self
    }

    pub fn restore_favourites(mut self, enabled: bool) -> Self {
        self.restore_favourites = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn favourites_path(&self) -> PathBuf {
        favourites_path(&self.path)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads and parses the book document.
    ///
    /// A new book is returned only when the whole document parses, so a caller
    /// holding a previously loaded book keeps it on failure.
    pub fn load(&self) -> Result<RecipeBook, BookError> {
        let text = self.storage.read(&self.path)?;
        let mut book = parse_document(&text)?;
        info!(
            "Loaded {} recipes from {}",
            book.len(),
            self.path.display()
        );

        // Without writes the favourites document goes stale, so it is not trusted
        if self.restore_favourites && self.write_favourites {
            self.restore_favourites_into(&mut book);
        }
        Ok(book)
    }

    /// Writes the book document and, when enabled, the favourites document.
    ///
    /// Nothing is written if the rendered document would not parse back into the
    /// same number of recipes, e.g. an instruction containing `:`. The in-memory
    /// book is never touched; on error the caller still holds it.
    pub fn save(&mut self, book: &RecipeBook) -> Result<(), BookError> {
        let text = serialize_document(book);
        check_readable(&text, book)?;

        self.storage.write(&self.path, &text)?;
        info!("Saved {} recipes to {}", book.len(), self.path.display());

        if self.write_favourites {
            let favourites = book.favourites_book();
            let path = self.favourites_path();
            self.storage
                .write(&path, &serialize_document(&favourites))?;
            debug!(
                "Saved {} favourite recipes to {}",
                favourites.len(),
                path.display()
            );
        }
        Ok(())
    }

    /// Flags recipes listed in the favourites document.
    ///
    /// Each listed recipe marks the first not yet marked recipe with the same
    /// content. A missing or malformed favourites document is skipped.
    fn restore_favourites_into(&self, book: &mut RecipeBook) {
        let path = self.favourites_path();
        let text = match self.storage.read(&path) {
            Ok(text) => text,
            Err(BookError::NotFound(_)) => return,
            Err(e) => {
                warn!("Skipping favourites: {}", e);
                return;
            }
        };

        let favourites = match parse_document(&text) {
            Ok(favourites) => favourites,
            Err(e) => {
                warn!("Skipping malformed favourites in {}: {}", path.display(), e);
                return;
            }
        };

        let mut restored = 0;
        for favourite in favourites.iter() {
            if book.restore_favourite(favourite) {
                restored += 1;
            } else {
                debug!("Favourite '{}' is no longer in the book", favourite.name);
            }
        }
        debug!("Restored {} favourites from {}", restored, path.display());
    }
}

/// Ensures `text` parses back into as many recipes as `book` holds.
fn check_readable(text: &str, book: &RecipeBook) -> Result<(), BookError> {
    let parsed = parse_document(text).map_err(BookError::Unreadable)?;
    if parsed.len() != book.len() {
        return Err(BookError::Unreadable(ParseError::RecipeCount {
            expected: book.len(),
            found: parsed.len(),
        }));
    }
    Ok(())
}
