//! Error types for termweight configuration.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use toml::{de, ser};

/// Errors raised while discovering, reading or writing `.termweight.toml` files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A discovered config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A config file is not valid TOML or does not match the schema.
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// Parser diagnostic, including line and column.
        source: de::Error,
    },

    /// A `~` path was configured but there is no home directory to expand it against.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// `init` found a config file where it would write one.
    #[error("configuration file already exists: {}", path.display())]
    AlreadyExists {
        /// The existing file.
        path: PathBuf,
    },

    /// A config file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A corpus or output path cannot be stored in TOML.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The unrepresentable path.
        path: PathBuf,
    },

    /// Settings could not be rendered as TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ser::Error),
}

impl ConfigError {
    /// The config file or configured path the error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::AlreadyExists { path }
            | Self::Write { path, .. }
            | Self::NonUtf8Path { path } => Some(path),
            Self::NoHomeDirectory | Self::Serialize(_) => None,
        }
    }
}
