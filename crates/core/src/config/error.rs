//! Errors raised while loading `.storefront/`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A settings or catalog file could not be loaded. Every variant names the
/// offending path.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `config.toml` is not valid TOML or has fields of the wrong type.
    #[error("invalid settings file {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A catalog file is not a YAML list of products.
    #[error("invalid product list {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A catalog file is not a JSON array of products.
    #[error("invalid product list {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot list catalog directory {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Settings parsed but hold an unusable value.
    #[error("invalid settings in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
}

impl ConfigError {
    /// The file or directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::FileRead { path, .. }
            | ConfigError::TomlParse { path, .. }
            | ConfigError::YamlParse { path, .. }
            | ConfigError::JsonParse { path, .. }
            | ConfigError::DirectoryWalk { path, .. }
            | ConfigError::InvalidConfig { path, .. } => path,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
