use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Recipe book settings
#[derive(Debug, Deserialize, Clone)]
pub struct BookConfig {
    /// Book document used when no path is given on the command line
    #[serde(default)]
    pub book: Option<PathBuf>,
    /// Write the favourites document next to the book on every save
    #[serde(default = "default_true")]
    pub write_favourites: bool,
    /// Mark recipes listed in the favourites document as favourite on load
    #[serde(default = "default_true")]
    pub restore_favourites: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            book: None,
            write_favourites: default_true(),
            restore_favourites: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl BookConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOOK__ prefix
    /// 2. recipe-book.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOOK__WRITE_FAVOURITES
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables, see [`BookConfig::load`]
pub fn load_config() -> Result<BookConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-book").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
