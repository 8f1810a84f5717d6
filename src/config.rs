//! File-backed scoring configuration.
//!
//! A TOML file may replace the category catalog, the compound rule table, or
//! both. Omitted sections fall back to the standard tables.
//!
//! ```toml
//! [categories]
//! ncc = 60
//! "nptel + 8 week" = 30
//!
//! [[compound_rules]]
//! token = "nptel"
//! phrase = "8 week"
//! label = "nptel + 8 week"
//! ```

use crate::{
    catalog::{CatalogError, CategoryCatalog},
    matching::{CompoundRule, standard_rules},
};
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a [`ScoringConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
    /// The file parsed but describes an unusable catalog.
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Category catalog and compound rules used to build a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "CategoryCatalog::standard")]
    pub categories: CategoryCatalog,
    #[serde(default = "standard_rules")]
    pub compound_rules: Vec<CompoundRule>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            categories: CategoryCatalog::standard(),
            compound_rules: standard_rules(),
        }
    }
}

impl ScoringConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if `path` does not exist,
    /// [`ConfigError::Load`] if it cannot be parsed, and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let config: Self = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)?;
        Ok(config.validate()?)
    }

    /// Ensure labels and rules are non-blank.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing the first problem found.
    #[must_use = "Validation should not be ignored"]
    pub fn validate(self) -> Result<Self, CatalogError> {
        self.categories.validate()?;
        for rule in &self.compound_rules {
            rule.validate()?;
        }
        Ok(self)
    }
}
