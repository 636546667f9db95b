use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{CatalogError, Result};
use crate::format::{INGREDIENTS_MARKER, INSTRUCTIONS_MARKER, RECIPE_MARKER};

const SECTION_MARKERS: [&str; 3] = [RECIPE_MARKER, INGREDIENTS_MARKER, INSTRUCTIONS_MARKER];

/// One line of a recipe's ingredient list.
///
/// All fields are kept as free text so quantities such as "1/2" or
/// "en kruka" survive a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Ingredient {
    pub amount: String,
    pub measure: String,
    pub name: String,
}

impl Ingredient {
    pub fn new(
        amount: impl Into<String>,
        measure: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Ingredient {
            amount: amount.into(),
            measure: measure.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.amount, &self.measure, &self.name]
            .into_iter()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// A recipe with a name, an ordered ingredient list and ordered instructions.
///
/// Equality and ordering look at the name only, compared byte-wise
/// (case-sensitive). Use [`Recipe::same_content`] to compare every field.
/// `clone()` is a deep copy: the clone shares no storage with the original.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    instructions: Vec<String>,
}

impl Recipe {
    /// Create an empty recipe.
    ///
    /// Fails if `name` is empty, contains a line break or equals a section
    /// marker. The recipe file cannot represent such names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "recipe name must not be empty".to_string(),
            ));
        }
        if name.contains(|c| c == '\n' || c == '\r') {
            return Err(CatalogError::InvalidArgument(format!(
                "recipe name {:?} must be a single line",
                name
            )));
        }
        if SECTION_MARKERS.contains(&name.as_str()) {
            return Err(CatalogError::InvalidArgument(format!(
                "recipe name must not be the section marker {}",
                name
            )));
        }

        Ok(Recipe {
            name,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn ingredients_mut(&mut self) -> &mut Vec<Ingredient> {
        &mut self.ingredients
    }

    pub fn instructions_mut(&mut self) -> &mut Vec<String> {
        &mut self.instructions
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn add_instruction(&mut self, line: impl Into<String>) {
        self.instructions.push(line.into());
    }

    /// Field-by-field comparison, unlike `==` which only compares names.
    pub fn same_content(&self, other: &Recipe) -> bool {
        self.name == other.name
            && self.ingredients == other.ingredients
            && self.instructions == other.instructions
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Recipe {}

impl PartialOrd for Recipe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Recipe {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
