//! Configuration types and parsing for config.json

use crate::error::{SqError, SqResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, resolved against the working directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Project configuration from config.json
///
/// Every field falls back to an empty string when absent. No further
/// validation happens here; an empty folder simply fails later when it is
/// listed or written to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the `<id>_<name>.up.sql` / `.down.sql` pairs
    #[serde(rename = "sqlFolder", default)]
    pub sql_folder: String,

    /// Directory receiving the generated C# sources
    #[serde(rename = "outputFolder", default)]
    pub output_folder: String,

    /// C# namespace wrapping every generated type
    #[serde(default)]
    pub namespace: String,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> SqResult<Self> {
        if !path.exists() {
            return Err(SqError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SqError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| SqError::ConfigParseError {
                path: path.display().to_string(),
                source: e,
            })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `config.json` inside a directory
    pub fn load_from_dir(dir: &Path) -> SqResult<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Source folder as a path
    pub fn sql_folder_path(&self) -> PathBuf {
        PathBuf::from(&self.sql_folder)
    }

    /// Output folder as a path
    pub fn output_folder_path(&self) -> PathBuf {
        PathBuf::from(&self.output_folder)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
