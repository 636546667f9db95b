use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the catalog is read from and written to
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// File read by `load()`
    #[serde(default = "default_load_path")]
    pub load_path: PathBuf,
    /// File written by `save()`; falls back to `load_path` when unset
    #[serde(default)]
    pub save_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            load_path: default_load_path(),
            save_path: None,
        }
    }
}

fn default_load_path() -> PathBuf {
    PathBuf::from("recept.txt")
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CATALOG__ prefix
    /// 2. catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CATALOG__LOAD_PATH
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn save_path(&self) -> &Path {
        self.save_path.as_deref().unwrap_or(&self.load_path)
    }
}

/// Load configuration from `catalog.toml` (optional) and the environment
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    build_config(File::with_name("catalog").required(false))
}

/// Load configuration from an explicit file, still honouring the environment
pub fn load_config_from(path: &Path) -> Result<CatalogConfig, ConfigError> {
    build_config(File::from(path).required(true))
}

fn build_config<S>(file: S) -> Result<CatalogConfig, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_CATALOG__SAVE_PATH
        .add_source(
            Environment::with_prefix("RECIPE_CATALOG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
