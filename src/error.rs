//! Error types

use std::path::PathBuf;

use derive_more::{Display, Error};

/// Failure while loading the configuration file
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// File exists but could not be read
    #[display("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File is not valid TOML for [`Config`](crate::config::Config)
    #[display("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Path of the offending file
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}
