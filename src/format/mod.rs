//! The recipe book text format.
//!
//! A document is a sequence of recipe blocks:
//!
//! ```text
//! Название рецепта: <name>
//! Категория: <category>
//! Ингредиенты:
//!     <name> - <amount>
//! Инструкция:
//!     <step>
//! ```
//!
//! Labels are matched case-insensitively on read and written verbatim.

mod parser;

pub use parser::Parser;

use crate::book::RecipeBook;
use crate::error::ParseError;

pub const NAME_LABEL: &str = "Название рецепта";
pub const CATEGORY_LABEL: &str = "Категория";
pub const INGREDIENTS_LABEL: &str = "Ингредиенты";
pub const INSTRUCTIONS_LABEL: &str = "Инструкция";

/// Parses a whole document into a book.
///
/// Parsing is all-or-nothing: a single malformed block fails the document and
/// none of the recipes parsed before it are returned.
pub fn parse_document(text: &str) -> Result<RecipeBook, ParseError> {
    Parser::new(text).parse_all().map(RecipeBook::from)
}

/// Renders every recipe block followed by a blank line.
pub fn serialize_document(book: &RecipeBook) -> String {
    let mut output = String::new();
    for recipe in book.iter() {
        output.push_str(&recipe.to_string());
        output.push('\n');
    }
    output
}
