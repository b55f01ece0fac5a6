//! Configuration file support for ngtrap.
//!
//! Loads optional `.ngtrap/config.toml` from the working directory, or the
//! file passed with `--config`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::CatalogBuilder;
use crate::error::{NgtrapError, Result};
use crate::fs_utils::StopFolders;
use crate::traps::TrapTables;

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct NgtrapConfig {
    /// Extra directory names to skip, on top of the built-in list.
    pub stop_folders: Vec<String>,
    /// Extra catalog entries. A key that already exists is overwritten.
    pub definitions: Vec<DefinitionConfig>,
    /// Template token → catalog key.
    pub markup_traps: BTreeMap<String, String>,
    /// Class-source regex → catalog key.
    pub logic_traps: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionConfig {
    pub key: String,
    pub tier: usize,
    pub imports: Vec<String>,
}

impl NgtrapConfig {
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(".ngtrap").join("config.toml")
    }

    /// Load config from `.ngtrap/config.toml` under `root`.
    /// Returns the default config if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_from_path(&Self::default_path(root))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|err| NgtrapError::io(path, err))?;
        toml::from_str(&content).map_err(|source| NgtrapError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge into the built-in catalog, trap tables and stop folders.
    pub fn apply(
        &self,
        catalog: &mut CatalogBuilder,
        tables: &mut TrapTables,
        stop: &mut StopFolders,
    ) {
        stop.extend(self.stop_folders.iter().cloned());
        for def in &self.definitions {
            if catalog.contains(&def.key) {
                tracing::debug!("config overrides definition [{}]", def.key);
            }
            catalog.insert(def.key.as_str(), def.tier, def.imports.iter().cloned());
        }
        for (trigger, key) in &self.markup_traps {
            tables.markup.insert(trigger.clone(), key.clone());
        }
        for (pattern, key) in &self.logic_traps {
            tables.logic.insert(pattern.clone(), key.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stop_folders.is_empty()
            && self.definitions.is_empty()
            && self.markup_traps.is_empty()
            && self.logic_traps.is_empty()
    }
}
