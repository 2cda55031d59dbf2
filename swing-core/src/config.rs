use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{SortSpec, sa};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub paging: Paging,
}
impl Config {
    pub const FILENAME: &str = "swing.toml";

    /// Loads the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, toml::to_string(self)?).map_err(|source| ConfigError::Write {
            path: path.to_owned(),
            source,
        })?;
        tracing::info!("saved config to {}", path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    pub base_url: String,
    pub access_token: String,
}
impl Default for Server {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1980".to_string(),
            access_token: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Paging {
    pub page_size: usize,
    pub sort_by: String,
    pub sort_order: sa::SortOrder,
}
impl Default for Paging {
    fn default() -> Self {
        let sort = SortSpec::default();
        Self {
            page_size: 20,
            sort_by: sort.sort_by,
            sort_order: sort.sort_order,
        }
    }
}
impl Paging {
    pub fn sort(&self) -> SortSpec {
        SortSpec {
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        }
    }
}
