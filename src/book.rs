use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::model::{same_text, Recipe};

/// An ordered collection of recipes.
///
/// Insertion order is kept until one of the sort methods reorders it. Names are
/// not unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Total number of recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Removes every recipe named `name` (ignoring case) and returns how many went.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| !same_text(&recipe.name, name));
        before - self.recipes.len()
    }

    /// Stable ordinal sort by name
    pub fn sort_by_name(&mut self) {
        self.recipes.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Stable ordinal sort by category
    pub fn sort_by_category(&mut self) {
        self.recipes.sort_by(|a, b| a.category.cmp(&b.category));
    }

    /// First recipe named `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| same_text(&recipe.name, name))
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Recipe> {
        self.recipes
            .iter_mut()
            .find(|recipe| same_text(&recipe.name, name))
    }

    /// Marks the first recipe named `name` as favourite. Returns false if none matched.
    pub fn set_favourite(&mut self, name: &str) -> bool {
        self.mark_favourite(name, true)
    }

    /// Clears the favourite flag on the first recipe named `name`.
    pub fn unset_favourite(&mut self, name: &str) -> bool {
        self.mark_favourite(name, false)
    }

    fn mark_favourite(&mut self, name: &str, favourite: bool) -> bool {
        match self.find_by_name_mut(name) {
            Some(recipe) => {
                recipe.favourite = favourite;
                true
            }
            None => false,
        }
    }

    /// Flags the first unflagged recipe with the same content as `favourite`.
    pub(crate) fn restore_favourite(&mut self, favourite: &Recipe) -> bool {
        match self
            .recipes
            .iter_mut()
            .find(|recipe| !recipe.favourite && recipe.same_content(favourite))
        {
            Some(recipe) => {
                recipe.favourite = true;
                true
            }
            None => false,
        }
    }

    /// Recipes currently flagged as favourite, in book order.
    ///
    /// Computed on every call, so it always reflects the current flags.
    pub fn favourites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|recipe| recipe.favourite).collect()
    }

    /// An owned book holding copies of the favourites view
    pub fn favourites_book(&self) -> RecipeBook {
        self.favourites().into_iter().cloned().collect()
    }

    /// Filters by name, ingredients and category. Empty criteria match everything.
    pub fn filter(&self, name: &str, ingredients: &[String], category: &str) -> Vec<&Recipe> {
        RecipeFilter::new()
            .name(name)
            .ingredients(ingredients.iter().cloned())
            .category(category)
            .apply(self.iter())
    }

    /// Number of recipes per exact category string.
    ///
    /// Grouping is case-sensitive: `Soup` and `soup` are separate keys.
    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for recipe in &self.recipes {
            *counts.entry(recipe.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Recipe>> for RecipeBook {
    fn from(recipes: Vec<Recipe>) -> Self {
        RecipeBook { recipes }
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        RecipeBook {
            recipes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Search criteria for recipes.
///
/// Stages run in order name, ingredients, category, each over the survivors of
/// the previous one. An unset or empty criterion passes everything through.
/// Ingredient names are OR-ed: a recipe survives if it has any of them.
///
/// # Example
/// ```
/// use recipe_book::{Ingredient, Recipe, RecipeBook, RecipeFilter};
///
/// let mut book = RecipeBook::new();
/// book.add(Recipe::new("Pancakes", "Breakfast", vec![Ingredient::parse("Eggs - 2")], vec![]));
///
/// let found = RecipeFilter::new()
///     .ingredient("eggs")
///     .category("breakfast")
///     .apply(&book);
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    name: Option<String>,
    ingredients: Vec<String>,
    category: Option<String>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only recipes with exactly this name, ignoring case
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Add an ingredient name to look for
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Keep only recipes in this category, ignoring case
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    pub fn is_identity(&self) -> bool {
        self.name.is_none() && self.ingredients.is_empty() && self.category.is_none()
    }

    /// Runs the filter stages, keeping survivors in input order
    pub fn apply<'a, I>(&self, recipes: I) -> Vec<&'a Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let matched: Vec<&Recipe> = recipes
            .into_iter()
            .filter(|recipe| self.matches_name(recipe))
            .filter(|recipe| self.matches_ingredients(recipe))
            .filter(|recipe| self.matches_category(recipe))
            .collect();

        debug!(
            "Filter name={:?} ingredients={:?} category={:?} matched {} recipes",
            self.name,
            self.ingredients,
            self.category,
            matched.len()
        );
        matched
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_name(recipe)
            && self.matches_ingredients(recipe)
            && self.matches_category(recipe)
    }

    fn matches_name(&self, recipe: &Recipe) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| same_text(&recipe.name, name))
    }

    fn matches_ingredients(&self, recipe: &Recipe) -> bool {
        self.ingredients.is_empty()
            || self
                .ingredients
                .iter()
                .any(|wanted| recipe.contains_ingredient(wanted))
    }

    fn matches_category(&self, recipe: &Recipe) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| same_text(&recipe.category, category))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
