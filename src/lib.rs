//! A personal recipe catalog kept in a sectioned plain-text file.
//!
//! ```no_run
//! use recipe_catalog::RecipeRepository;
//!
//! let mut repository = RecipeRepository::with_path("recept.txt");
//! repository.load()?;
//! for recipe in repository.get_all() {
//!     println!("{}", recipe.name());
//! }
//! repository.delete_at(0)?;
//! repository.save()?;
//! # Ok::<(), recipe_catalog::CatalogError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod notify;
pub mod repository;

pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use model::{Ingredient, Recipe};
pub use notify::{ChangeNotifier, SubscriptionId};
pub use repository::RecipeRepository;

/// Render recipes as pretty-printed JSON.
pub fn recipes_to_json<'a, I>(recipes: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let recipes: Vec<&Recipe> = recipes.into_iter().collect();
    Ok(serde_json::to_string_pretty(&recipes)?)
}
