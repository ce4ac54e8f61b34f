use log::debug;

use crate::error::ParseError;
use crate::format::{CATEGORY_LABEL, INGREDIENTS_LABEL, INSTRUCTIONS_LABEL, NAME_LABEL};
use crate::model::{same_text, Ingredient, Recipe};

/// A trimmed, non-blank line together with its 1-based position in the raw text.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

/// Cursor over the clean lines of a document.
///
/// Record boundaries come only from field labels; blank lines carry no meaning.
/// A line containing `:` always starts a new field, so ingredient or instruction
/// text containing a colon ends its section early.
#[derive(Debug)]
pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(index, raw)| Line {
                number: index + 1,
                text: raw.trim(),
            })
            .filter(|line| !line.text.is_empty())
            .collect();

        Parser { lines, position: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.lines.len()
    }

    /// Parses every recipe block until the input is exhausted.
    ///
    /// Nothing is returned unless every block parses.
    pub fn parse_all(mut self) -> Result<Vec<Recipe>, ParseError> {
        let mut recipes = Vec::new();
        while !self.is_at_end() {
            recipes.push(self.parse_recipe()?);
        }
        Ok(recipes)
    }

    /// Parses one recipe block starting at the cursor.
    pub fn parse_recipe(&mut self) -> Result<Recipe, ParseError> {
        let name = self.expect_field(NAME_LABEL)?;
        let category = self.expect_field(CATEGORY_LABEL)?;

        self.expect_header(INGREDIENTS_LABEL)?;
        let ingredients = self
            .take_until_next_field()
            .into_iter()
            .map(Ingredient::parse)
            .collect();

        self.expect_header(INSTRUCTIONS_LABEL)?;
        let instructions = self
            .take_until_next_field()
            .into_iter()
            .map(str::to_string)
            .collect();

        let recipe = Recipe::new(name, category, ingredients, instructions);
        debug!(
            "Parsed recipe '{}' ({} ingredients, {} instructions)",
            recipe.name,
            recipe.ingredients.len(),
            recipe.instructions.len()
        );
        Ok(recipe)
    }

    /// Consumes a `label: value` line and returns the value.
    pub fn expect_field(&mut self, label: &'static str) -> Result<&'a str, ParseError> {
        let line = self.expect_label(label)?;
        match split_field(line.text).1 {
            Some(value) => Ok(value),
            None => Err(ParseError::MissingValue {
                line: line.number,
                field: label,
            }),
        }
    }

    /// Consumes a section header line; anything after its `:` is ignored.
    pub fn expect_header(&mut self, label: &'static str) -> Result<(), ParseError> {
        self.expect_label(label).map(|_| ())
    }

    /// Consumes lines up to, not including, the next line containing `:`.
    pub fn take_until_next_field(&mut self) -> Vec<&'a str> {
        let mut taken = Vec::new();
        while let Some(line) = self.lines.get(self.position) {
            if line.text.contains(':') {
                break;
            }
            taken.push(line.text);
            self.position += 1;
        }
        taken
    }

    fn expect_label(&mut self, label: &'static str) -> Result<Line<'a>, ParseError> {
        let line = *self
            .lines
            .get(self.position)
            .ok_or(ParseError::UnexpectedEnd { expected: label })?;

        let (found, _) = split_field(line.text);
        if !same_text(found, label) {
            return Err(ParseError::UnexpectedField {
                line: line.number,
                expected: label,
                found: found.to_string(),
            });
        }

        self.position += 1;
        Ok(line)
    }
}

/// Splits a line on its first `:` into a trimmed label and optional trimmed value.
fn split_field(text: &str) -> (&str, Option<&str>) {
    match text.split_once(':') {
        Some((label, value)) => (label.trim(), Some(value.trim())),
        None => (text.trim(), None),
    }
}
