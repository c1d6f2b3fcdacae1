// ⚙️ Catalog Configuration
//
// Loaded from TOML; every field has a default so an empty file is valid.
//
//   data_path = "job_data.csv"
//   column_mapping = "positional"   # or "by-header"
//   on_source_error = "fail"        # or "empty"

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "job_data.csv";

/// How CSV columns are mapped onto job fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnMapping {
    /// Columns 0-4 are name, employer, location, position type, core competency
    #[default]
    Positional,

    /// Columns are located by their header names, in any order
    ByHeader,
}

/// What happens when the data source cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceErrorPolicy {
    /// Every operation returns the load error
    #[default]
    Fail,

    /// Log the error and serve an empty catalog
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
    pub column_mapping: ColumnMapping,
    pub on_source_error: SourceErrorPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            column_mapping: ColumnMapping::default(),
            on_source_error: SourceErrorPolicy::default(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| CatalogError::Config {
            reason: e.to_string(),
        })
    }

    /// Read a config file. Relative `data_path` values are resolved against
    /// the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            reason: format!("{}: {}", path.display(), e),
        })?;

        let mut config = Self::from_toml_str(&contents)?;
        if config.data_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.data_path = dir.join(&config.data_path);
            }
        }
        Ok(config)
    }

    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    pub fn with_column_mapping(mut self, column_mapping: ColumnMapping) -> Self {
        self.column_mapping = column_mapping;
        self
    }

    pub fn with_source_error_policy(mut self, policy: SourceErrorPolicy) -> Self {
        self.on_source_error = policy;
        self
    }
}
