//! Configuration file parsing.
//!
//! Parses individual `.termweight.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, CorpusFormat, StopwordLexicon};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Pipeline stage section.
    pub pipeline: Option<RawPipelineSettings>,
    /// Corpus source section.
    pub corpus: Option<RawCorpusSettings>,
    /// Output location section.
    pub output: Option<RawOutputSettings>,
    /// Preview section.
    pub preview: Option<RawPreviewSettings>,
}

/// Raw pipeline stage toggles.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPipelineSettings {
    /// Lowercase and strip punctuation before tokenizing.
    pub normalize: Option<bool>,
    /// Remove stopwords after tokenizing.
    pub remove_stopwords: Option<bool>,
    /// Apply Porter stemming.
    pub stem: Option<bool>,
    /// Stopword lexicon name.
    pub stopwords: Option<StopwordLexicon>,
}

/// Raw corpus source settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpusSettings {
    /// Corpus file or directory, relative to the config file.
    pub path: Option<String>,
    /// How the corpus path is read.
    pub format: Option<CorpusFormat>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputSettings {
    /// Directory receiving the CSV tables, relative to the config file.
    pub dir: Option<String>,
}

/// Raw preview settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPreviewSettings {
    /// Highest-weighted rows to show per document.
    pub top: Option<usize>,
    /// Lowest-weighted rows to show per document.
    pub bottom: Option<usize>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}
