use std::path::PathBuf;

use thiserror::Error;

/// Grammar violations found while parsing a recipe book document.
///
/// Line numbers are 1-based and refer to the raw document, blank lines included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line was found where a different field label was expected
    #[error("line {line}: expected field `{expected}`, found `{found}`")]
    UnexpectedField {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// A value field (name or category) has no `:` separating label and value
    #[error("line {line}: field `{field}` has no value")]
    MissingValue { line: usize, field: &'static str },

    /// The document ended while a field was still expected
    #[error("unexpected end of document, expected field `{expected}`")]
    UnexpectedEnd { expected: &'static str },

    /// The document parsed into a different number of recipes than were written
    #[error("expected {expected} recipes, found {found}")]
    RecipeCount { expected: usize, found: usize },
}

/// Errors that can occur while loading, saving or configuring a recipe book
#[derive(Error, Debug)]
pub enum BookError {
    /// The document does not follow the recipe book format
    #[error("Failed to parse recipe book: {0}")]
    Parse(#[from] ParseError),

    /// The book would be written in a form that does not parse back
    #[error("Refusing to save a book that cannot be read back: {0}")]
    Unreadable(#[source] ParseError),

    /// The document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No document exists at the given path
    #[error("Recipe book not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
