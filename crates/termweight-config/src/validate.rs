//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::Path};

use crate::{Config, CorpusFormat};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No corpus path is configured.
    NoCorpusConfigured,
    /// The corpus path does not exist.
    CorpusPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The corpus format expects a directory but the path is a file.
    CorpusNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// The corpus format expects a file but the path is a directory.
    CorpusNotFile {
        /// Path that is not a regular file.
        path: String,
    },
    /// Both preview counts are zero, so `preview` prints nothing.
    PreviewDisabled,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCorpusConfigured => write!(f, "no corpus path is configured"),
            Self::CorpusPathMissing { path } => write!(f, "corpus path does not exist: {path}"),
            Self::CorpusNotDirectory { path } => {
                write!(f, "corpus format is 'directory' but path is a file: {path}")
            }
            Self::CorpusNotFile { path } => {
                write!(f, "corpus format is 'lines' but path is a directory: {path}")
            }
            Self::PreviewDisabled => write!(f, "preview top and bottom are both 0"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match config.corpus.path.as_deref() {
        None => warnings.push(ConfigWarning::NoCorpusConfigured),
        Some(path) => warnings.extend(validate_corpus_path(path, config.corpus.format)),
    }

    if config.preview.top == 0 && config.preview.bottom == 0 {
        warnings.push(ConfigWarning::PreviewDisabled);
    }

    warnings
}

/// Checks that the corpus path exists and matches its declared format.
fn validate_corpus_path(path: &Path, format: CorpusFormat) -> Option<ConfigWarning> {
    let shown = path.display().to_string();
    if !path.exists() {
        return Some(ConfigWarning::CorpusPathMissing { path: shown });
    }
    match format {
        CorpusFormat::Directory if !path.is_dir() => {
            Some(ConfigWarning::CorpusNotDirectory { path: shown })
        }
        CorpusFormat::Lines if path.is_dir() => Some(ConfigWarning::CorpusNotFile { path: shown }),
        _ => None,
    }
}
