//! Configuration system for termweight.
//!
//! termweight reads TOML files named `.termweight.toml`. Discovery walks up from the
//! working directory, parsing each file into a [`ConfigLayer`], and adds
//! `~/.termweight.toml` as the lowest-precedence layer. The layers are then merged into
//! one [`Config`]. `termweight init` writes new files through [`Starter`].

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod pipeline;
mod resolve;
mod starter;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use discovery::{
    CONFIG_FILENAME, ConfigLayer, ConfigScope, ConfigSource, discover_layers, global_config_path,
};
pub use error::ConfigError;
pub use merge::merge_layers;
pub use parse::{
    RawConfig, RawCorpusSettings, RawOutputSettings, RawPipelineSettings, RawPreviewSettings,
    parse_config_file, parse_config_str,
};
pub use pipeline::{PipelineSettings, Stage, StopwordLexicon};
pub use resolve::{format_path_for_display, resolve_path};
use serde::{Deserialize, Serialize};
pub use starter::{Starter, write_config_file};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default output directory name.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Top-level merged configuration for termweight.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.termweight.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional pipeline stages.
    pub pipeline: PipelineSettings,
    /// Where the corpus comes from.
    pub corpus: CorpusSettings,
    /// Where tables are written.
    pub output: OutputSettings,
    /// Preview row counts.
    pub preview: PreviewSettings,
    /// Directory containing the closest project config file.
    pub config_root: Option<PathBuf>,
    /// Files that contributed, closest first.
    pub sources: Vec<ConfigSource>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.termweight.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Ok(merge_layers(&discover_layers(cwd)?))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            pipeline: self.pipeline,
            corpus: &self.corpus,
            output: &self.output,
            preview: self.preview,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// How a corpus path is turned into documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// Directory when the path is a directory, lines otherwise.
    #[default]
    Auto,
    /// One document per non-empty line of a single file.
    Lines,
    /// One document per file under a directory.
    Directory,
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "lines" => Ok(Self::Lines),
            "directory" | "dir" => Ok(Self::Directory),
            other => Err(format!(
                "unknown corpus format '{other}' (expected 'auto', 'lines' or 'directory')"
            )),
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Lines => write!(f, "lines"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// Corpus source settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusSettings {
    /// Resolved corpus file or directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// How the corpus path is read.
    pub format: CorpusFormat,
}

/// Output location settings.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSettings {
    /// Directory receiving the CSV tables.
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Preview row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewSettings {
    /// Highest-weighted rows to show per document.
    pub top: usize,
    /// Lowest-weighted rows to show per document.
    pub bottom: usize,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self { top: 5, bottom: 5 }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Pipeline stage toggles.
    pipeline: PipelineSettings,
    /// Corpus source.
    corpus: &'a CorpusSettings,
    /// Output location.
    output: &'a OutputSettings,
    /// Preview counts.
    preview: PreviewSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pipeline, PipelineSettings::default());
        assert!(config.corpus.path.is_none());
        assert_eq!(config.corpus.format, CorpusFormat::Auto);
        assert_eq!(config.output.dir, PathBuf::from("outputs"));
        assert_eq!(config.preview, PreviewSettings { top: 5, bottom: 5 });
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml_round_trips_pipeline() {
        let config = Config::default();
        let toml = config.settings_to_toml().unwrap();
        assert!(toml.contains("[pipeline]"));
        assert!(toml.contains("stopwords = \"standard\""));
        assert!(!toml.contains("path ="));

        let raw = parse::parse_config(&toml).unwrap();
        let pipeline = raw.pipeline.unwrap();
        assert_eq!(pipeline.normalize, Some(true));
        assert_eq!(pipeline.stem, Some(true));
    }

    #[test]
    fn test_settings_to_toml_includes_corpus_path() {
        let config = Config {
            corpus: CorpusSettings {
                path: Some(PathBuf::from("/data/corpus.txt")),
                format: CorpusFormat::Lines,
            },
            ..Config::default()
        };
        let toml = config.settings_to_toml().unwrap();
        assert!(toml.contains("path = \"/data/corpus.txt\""));
        assert!(toml.contains("format = \"lines\""));
    }

    #[test]
    fn test_parse_corpus_format() {
        assert_eq!("lines".parse(), Ok(CorpusFormat::Lines));
        assert_eq!("dir".parse(), Ok(CorpusFormat::Directory));
        assert_eq!("AUTO".parse(), Ok(CorpusFormat::Auto));
        assert!("csv".parse::<CorpusFormat>().is_err());
    }
}
