use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub purge: PurgeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Task ids never registered, even when their tool is on PATH
    pub disabled_ecosystems: Vec<String>,
    /// Run the global cache clears after a non-dry pass
    pub clear_global_caches: bool,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            disabled_ecosystems: vec![],
            clear_global_caches: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse; otherwise the default
    /// location is tried and silently falls back to defaults when the
    /// file is absent.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("purge-deps").join("config.toml"))
    }
}
