//! # tess-config
//!
//! Layered configuration loading for Tessera using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TESSERA_*` prefix, `__` as separator)
//! 2. Project-level `.tessera/config.toml`
//! 3. User-level `~/.config/tessera/config.toml`
//! 4. Built-in defaults
//!
//! `TESSERA_GRID__DEFAULT_COLUMN_WIDTH` maps to `grid.default_column_width`,
//! `TESSERA_CACHE__DISPLAY_CAPACITY` to `cache.display_capacity`.
//!
//! # Usage
//!
//! ```no_run
//! use tess_config::TesseraConfig;
//!
//! let config = TesseraConfig::load_with_dotenv().expect("config");
//! println!("default width: {}", config.grid.default_column_width);
//! ```

mod cache;
mod error;
mod grid;

pub use cache::{CacheConfig, DEFAULT_DISPLAY_CAPACITY};
pub use error::ConfigError;
pub use grid::{
    DEFAULT_COLUMN_WIDTH, DEFAULT_ERROR_HEADER_COLOR, DEFAULT_UNTITLED_LABEL, GridConfig,
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TesseraConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl TesseraConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            tracing::trace!(%error, "no .env file loaded");
        }
        Self::load()
    }

    /// Load with an explicit config file layered over the defaults and under
    /// the environment. The standard user/project files are skipped.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("TESSERA_").split("__"));
        Self::from_figment(&figment)
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.cache.validate()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tessera/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TESSERA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tessera").join("config.toml"))
    }
}
