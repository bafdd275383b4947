//! Errors raised while loading `folio.toml`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),

    /// Inline TOML (no file) is malformed.
    #[error("invalid folio config")]
    Toml(#[from] toml::de::Error),

    /// The config file is malformed.
    #[error("failed to parse `{}`", .0.display())]
    ParseFile(PathBuf, #[source] toml::de::Error),

    #[error("invalid folio config: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Config file involved, if the error came from one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read(path, _) | Self::ParseFile(path, _) => Some(path),
            Self::Toml(_) | Self::Validation(_) => None,
        }
    }
}
