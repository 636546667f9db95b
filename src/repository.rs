use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::format;
use crate::model::Recipe;
use crate::notify::{ChangeNotifier, SubscriptionId};

/// Owns the canonical recipe collection and keeps it in sync with the file.
///
/// Readers only ever get deep copies. Successful `load()` and `delete*()`
/// calls notify subscribers once; failed calls leave everything as it was.
#[derive(Debug)]
pub struct RecipeRepository {
    recipes: Vec<Recipe>,
    modified: bool,
    load_path: PathBuf,
    save_path: PathBuf,
    notifier: ChangeNotifier,
}

impl RecipeRepository {
    /// An empty repository reading from `load_path` and writing to `save_path`.
    pub fn new(load_path: impl Into<PathBuf>, save_path: impl Into<PathBuf>) -> Self {
        RecipeRepository {
            recipes: Vec::new(),
            modified: false,
            load_path: load_path.into(),
            save_path: save_path.into(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(path.clone(), path)
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.load_path.clone(), config.save_path().to_path_buf())
    }

    pub fn load_path(&self) -> &Path {
        &self.load_path
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Replace the collection with the contents of the load file.
    ///
    /// Returns the number of recipes read. The new collection is sorted by
    /// name; recipes with equal names keep their file order.
    pub fn load(&mut self) -> Result<usize> {
        debug!("Loading recipes from {}", self.load_path.display());

        let file = File::open(&self.load_path).map_err(|e| CatalogError::io(&self.load_path, e))?;
        let mut recipes = format::read_recipes(BufReader::new(file), &self.load_path)
            .inspect_err(|e| warn!("Load of {} failed: {}", self.load_path.display(), e))?;
        recipes.sort();

        self.recipes = recipes;
        self.modified = false;
        info!(
            "Loaded {} recipes from {}",
            self.recipes.len(),
            self.load_path.display()
        );

        self.notifier.notify();
        Ok(self.recipes.len())
    }

    /// Write the collection to the save file in its current order.
    pub fn save(&mut self) -> Result<()> {
        debug!("Saving {} recipes to {}", self.recipes.len(), self.save_path.display());

        let file =
            File::create(&self.save_path).map_err(|e| CatalogError::io(&self.save_path, e))?;
        format::write_recipes(BufWriter::new(file), &self.recipes)
            .map_err(|e| CatalogError::io(&self.save_path, e))?;

        self.modified = false;
        info!(
            "Saved {} recipes to {}",
            self.recipes.len(),
            self.save_path.display()
        );
        Ok(())
    }

    /// Lazily yields a fresh copy of every recipe, in collection order.
    pub fn get_all(&self) -> impl Iterator<Item = Recipe> + '_ {
        self.recipes.iter().cloned()
    }

    /// A copy of the recipe at `index`.
    pub fn get_at(&self, index: usize) -> Result<Recipe> {
        self.recipes
            .get(index)
            .cloned()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Remove the canonical entry matching `recipe`.
    ///
    /// An entry with identical content is preferred; otherwise the first entry
    /// with the same name is removed. Fails with `NotFound` if neither exists.
    pub fn delete(&mut self, recipe: &Recipe) -> Result<Recipe> {
        let position = self
            .recipes
            .iter()
            .position(|existing| existing.same_content(recipe))
            .or_else(|| self.recipes.iter().position(|existing| existing == recipe));

        match position {
            Some(index) => Ok(self.remove(index)),
            None => {
                warn!("Cannot delete '{}': no such recipe", recipe.name());
                Err(CatalogError::NotFound {
                    name: recipe.name().to_string(),
                })
            }
        }
    }

    /// Remove the entry at `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<Recipe> {
        if index >= self.recipes.len() {
            warn!("Cannot delete index {}: out of range", index);
            return Err(self.out_of_range(index));
        }
        Ok(self.remove(index))
    }

    fn remove(&mut self, index: usize) -> Recipe {
        let removed = self.recipes.remove(index);
        self.modified = true;
        info!("Deleted recipe '{}'", removed.name());

        self.notifier.notify();
        removed
    }

    fn out_of_range(&self, index: usize) -> CatalogError {
        CatalogError::IndexOutOfRange {
            index,
            len: self.recipes.len(),
        }
    }

    /// True when the collection differs from what was last loaded or saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Register a callback for "collection changed". The callback receives
    /// the notifier and may (un)subscribe through it.
    pub fn subscribe(&self, callback: impl Fn(&ChangeNotifier) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
