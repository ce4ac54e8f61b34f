//! A personal recipe book kept in a plain text document.
//!
//! The crate parses the document into a [`RecipeBook`], lets callers add, remove,
//! sort, filter and count recipes, and writes the book back in the same format
//! together with a favourites-only document.
//!
//! # Example
//! ```
//! use recipe_book::{parse_document, serialize_document};
//!
//! let text = "Название рецепта: Чай
//! Категория: Напитки
//! Ингредиенты:
//!     Чай - 1 ложка
//! Инструкция:
//!     Заварить
//! ";
//! let mut book = parse_document(text)?;
//! book.set_favourite("чай");
//!
//! assert_eq!(book.favourites().len(), 1);
//! assert!(serialize_document(&book).starts_with("Название рецепта: Чай\n"));
//! # Ok::<(), recipe_book::ParseError>(())
//! ```

pub mod book;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod storage;

use std::path::Path;

pub use book::{RecipeBook, RecipeFilter};
pub use crate::config::BookConfig;
pub use error::{BookError, ParseError};
pub use format::{parse_document, serialize_document};
pub use model::{Ingredient, Recipe};
pub use storage::{favourites_path, BookFile, FileStorage, MemoryStorage, Storage};

/// Loads a book document from the filesystem, restoring favourites
pub fn load_book(path: impl AsRef<Path>) -> Result<RecipeBook, BookError> {
    BookFile::open(path.as_ref()).load()
}

/// Saves a book and its favourites document to the filesystem
pub fn save_book(path: impl AsRef<Path>, book: &RecipeBook) -> Result<(), BookError> {
    BookFile::open(path.as_ref()).save(book)
}
