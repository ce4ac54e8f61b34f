use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{CATEGORY_LABEL, INGREDIENTS_LABEL, INSTRUCTIONS_LABEL, NAME_LABEL};

/// Case-insensitive comparison used by every lookup in the book.
/// Both sides are folded with Unicode lowercase.
pub(crate) fn same_text(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// A single ingredient line: a name and an optional free-text amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Empty when no amount was given
    #[serde(default)]
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Ingredient {
            name: name.into().trim().to_string(),
            amount: amount.into().trim().to_string(),
        }
    }

    /// Parses the `name - amount` line format.
    ///
    /// Only the first two `-` separated segments are kept, so an amount that itself
    /// contains `-` (e.g. `Eggs - 2-3 pcs`) is truncated to its first part.
    pub fn parse(line: &str) -> Self {
        let mut segments = line.split('-');
        let name = segments.next().unwrap_or_default().trim();
        let amount = segments.next().unwrap_or_default().trim();

        Ingredient {
            name: name.to_string(),
            amount: amount.to_string(),
        }
    }

    pub fn has_amount(&self) -> bool {
        !self.amount.is_empty()
    }
}

impl From<&str> for Ingredient {
    fn from(line: &str) -> Self {
        Ingredient::parse(line)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_amount() {
            write!(f, "{} - {}", self.name, self.amount)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A recipe as stored in the book.
///
/// Everything except the favourite flag is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub favourite: bool,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        ingredients: Vec<Ingredient>,
        instructions: Vec<String>,
    ) -> Self {
        Recipe {
            name: name.into(),
            category: category.into(),
            favourite: false,
            ingredients,
            instructions,
        }
    }

    /// Returns true if any ingredient is named `name`, ignoring case
    pub fn contains_ingredient(&self, name: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| same_text(&ingredient.name, name))
    }

    /// Compares everything but the favourite flag
    pub fn same_content(&self, other: &Recipe) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.ingredients == other.ingredients
            && self.instructions == other.instructions
    }
}

/// Renders the recipe block exactly as it is stored in a book document.
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", NAME_LABEL, self.name)?;
        writeln!(f, "{}: {}", CATEGORY_LABEL, self.category)?;
        writeln!(f, "{}:", INGREDIENTS_LABEL)?;
        for ingredient in &self.ingredients {
            writeln!(f, "\t{}", ingredient)?;
        }
        writeln!(f, "{}:", INSTRUCTIONS_LABEL)?;
        for instruction in &self.instructions {
            writeln!(f, "\t{}", instruction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_with_amount() {
        let ingredient = Ingredient::parse("  Мука - 200 г ");
        assert_eq!(ingredient.name, "Мука");
        assert_eq!(ingredient.amount, "200 г");
        assert_eq!(ingredient.to_string(), "Мука - 200 г");
    }

    #[test]
    fn test_ingredient_without_amount() {
        let ingredient = Ingredient::parse("Salt");
        assert_eq!(ingredient.name, "Salt");
        assert!(!ingredient.has_amount());
        assert_eq!(ingredient.to_string(), "Salt");
    }

    #[test]
    fn test_ingredient_amount_with_dash_is_truncated() {
        // Known limitation of the line format: extra segments are dropped
        let ingredient = Ingredient::parse("Eggs - 2-3 pcs");
        assert_eq!(ingredient.name, "Eggs");
        assert_eq!(ingredient.amount, "2");
    }

    #[test]
    fn test_ingredient_new_trims() {
        let ingredient = Ingredient::new(" Milk ", " 1 cup ");
        assert_eq!(ingredient, Ingredient::parse("Milk - 1 cup"));
    }

    #[test]
    fn test_contains_ingredient_ignores_case() {
        let recipe = Recipe::new(
            "Pancakes",
            "Breakfast",
            vec![Ingredient::parse("Flour - 1 cup"), Ingredient::parse("Eggs")],
            vec![],
        );
        assert!(recipe.contains_ingredient("eggs"));
        assert!(recipe.contains_ingredient("FLOUR"));
        assert!(!recipe.contains_ingredient("Milk"));
    }

    #[test]
    fn test_recipe_block_rendering() {
        let recipe = Recipe::new(
            "Борщ",
            "Супы",
            vec![Ingredient::parse("Свекла - 2 шт"), Ingredient::parse("Соль")],
            vec!["Сварить бульон".to_string(), "Добавить свеклу".to_string()],
        );

        let expected = "Название рецепта: Борщ\n\
                        Категория: Супы\n\
                        Ингредиенты:\n\
                        \tСвекла - 2 шт\n\
                        \tСоль\n\
                        Инструкция:\n\
                        \tСварить бульон\n\
                        \tДобавить свеклу\n";
        assert_eq!(recipe.to_string(), expected);
    }

    #[test]
    fn test_same_content_ignores_favourite() {
        let a = Recipe::new("Tea", "Drinks", vec![], vec!["Boil water".to_string()]);
        let mut b = a.clone();
        b.favourite = true;
        assert!(a.same_content(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_text_unicode_case() {
        assert!(same_text("СУП", "суп"));
        assert!(!same_text("суп", "супы"));
    }
}
