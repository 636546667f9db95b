//! Reading and writing the sectioned recipe file.
//!
//! ```text
//! [Recept]
//! Pannkakor
//! [Ingredienser]
//! 3;dl;vetemjöl
//! [Instruktioner]
//! Vispa ihop smeten.
//! ```
//!
//! A recipe ends where the next `[Recept]` marker starts. Ingredient lines
//! hold exactly three `;`-separated fields and there is no escaping.

use log::debug;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::model::{Ingredient, Recipe};

pub const RECIPE_MARKER: &str = "[Recept]";
pub const INGREDIENTS_MARKER: &str = "[Ingredienser]";
pub const INSTRUCTIONS_MARKER: &str = "[Instruktioner]";

const INGREDIENT_SEPARATOR: char = ';';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Which section the parser is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// No marker seen yet
    #[default]
    Indefinite,
    New,
    Ingredient,
    Instruction,
}

/// Line-driven state machine that builds recipes from the file layout.
///
/// Feed lines in order with [`RecipeParser::feed`], then call
/// [`RecipeParser::finish`]. The first error aborts the parse; the caller
/// should drop the parser.
#[derive(Debug, Default)]
pub struct RecipeParser {
    state: ParseState,
    recipes: Vec<Recipe>,
    line: usize,
}

impl RecipeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Process one line, already stripped of its line terminator.
    ///
    /// A UTF-8 byte order mark at the start of the first line is ignored.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        let line = match self.line {
            0 => line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line),
            _ => line,
        };
        self.line += 1;

        match line {
            RECIPE_MARKER => self.enter(ParseState::New),
            INGREDIENTS_MARKER => self.enter(ParseState::Ingredient),
            INSTRUCTIONS_MARKER => self.enter(ParseState::Instruction),
            content => self.content(content)?,
        }

        Ok(())
    }

    /// The parsed recipes, in file order.
    pub fn finish(self) -> Vec<Recipe> {
        self.recipes
    }

    fn enter(&mut self, state: ParseState) {
        debug!("line {}: {:?} -> {:?}", self.line, self.state, state);
        self.state = state;
    }

    fn content(&mut self, line: &str) -> Result<()> {
        match self.state {
            ParseState::Indefinite => Err(CatalogError::format(
                self.line,
                format!("content before the first section marker: '{}'", line),
            )),
            ParseState::New => {
                let recipe = Recipe::new(line)
                    .map_err(|e| CatalogError::format(self.line, e.to_string()))?;
                self.recipes.push(recipe);
                Ok(())
            }
            ParseState::Ingredient => {
                let ingredient = parse_ingredient(line).ok_or_else(|| {
                    CatalogError::format(
                        self.line,
                        format!(
                            "ingredient line '{}' must have exactly 3 fields: amount;measure;name",
                            line
                        ),
                    )
                })?;
                self.current()?.add_ingredient(ingredient);
                Ok(())
            }
            ParseState::Instruction => {
                self.current()?.add_instruction(line);
                Ok(())
            }
        }
    }

    fn current(&mut self) -> Result<&mut Recipe> {
        let line = self.line;
        self.recipes.last_mut().ok_or_else(|| {
            CatalogError::format(line, format!("section content before any {}", RECIPE_MARKER))
        })
    }
}

fn parse_ingredient(line: &str) -> Option<Ingredient> {
    let fields: Vec<&str> = line.split(INGREDIENT_SEPARATOR).collect();
    match fields.as_slice() {
        [amount, measure, name] => Some(Ingredient::new(*amount, *measure, *name)),
        _ => None,
    }
}

/// Parse recipes from a reader. `path` is only used in I/O error messages.
pub fn read_recipes<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Recipe>> {
    let mut parser = RecipeParser::new();
    for line in reader.lines() {
        let line = line.map_err(|e| CatalogError::io(path, e))?;
        parser.feed(&line)?;
    }
    Ok(parser.finish())
}

/// Write recipes in the sectioned layout, in the given order.
///
/// Both section markers are written even when a list is empty.
pub fn write_recipes<'a, W, I>(mut writer: W, recipes: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Recipe>,
{
    for recipe in recipes {
        writeln!(writer, "{}", RECIPE_MARKER)?;
        writeln!(writer, "{}", recipe.name())?;

        writeln!(writer, "{}", INGREDIENTS_MARKER)?;
        for ingredient in recipe.ingredients() {
            writeln!(
                writer,
                "{}{sep}{}{sep}{}",
                ingredient.amount,
                ingredient.measure,
                ingredient.name,
                sep = INGREDIENT_SEPARATOR
            )?;
        }

        writeln!(writer, "{}", INSTRUCTIONS_MARKER)?;
        for instruction in recipe.instructions() {
            writeln!(writer, "{}", instruction)?;
        }
    }
    writer.flush()
}
