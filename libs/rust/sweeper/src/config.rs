//! Declarative rule sets loaded from YAML.
//!
//! ```yaml
//! classes:
//!   Address:
//!     address1: [strip]
//!     city: [nbsp, squish]
//! ```
//!
//! Each field's brooms are chained into one transform and registered
//! through the normal `sweep` path, so duplicate checks still apply.

use std::collections::BTreeMap;
use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::brooms::{self, Broom};
use crate::error::SweepError;
use crate::registry::SweepClass;

pub const CONFIG_FILE_ENV: &str = "SWEEPER_CONFIG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")] Io(#[from] std::io::Error),
    #[error("yaml error: {0}")] Yaml(#[from] serde_yaml::Error),
    #[error("{class}.{field} lists no brooms")] EmptyBrooms { class: String, field: String },
    #[error(transparent)] Sweep(#[from] SweepError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub classes: BTreeMap<String, BTreeMap<String, Vec<Broom>>>,
}

impl SweepConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> { Ok(serde_yaml::from_str(text)?) }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Loads the file named by `SWEEPER_CONFIG_FILE`. Unset or empty means
    /// no config.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var_os(CONFIG_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::load(path).map(Some),
            _ => Ok(None),
        }
    }

    /// Registers the rules listed for `class`. Returns how many fields were
    /// registered; a class missing from the config registers none.
    pub fn apply(&self, class: &SweepClass<String>) -> Result<usize, ConfigError> {
        let Some(fields) = self.classes.get(class.name()) else { return Ok(0) };
        for (field, chain) in fields {
            if chain.is_empty() {
                return Err(ConfigError::EmptyBrooms { class: class.name().to_string(), field: field.clone() });
            }
        }
        for (field, chain) in fields {
            class.sweep(field, brooms::chain(chain.clone()))?;
        }
        info!(class = class.name(), rules = fields.len(), "applied sweep config");
        Ok(fields.len())
    }
}
