//! Starter configuration files for `termweight init`.
//!
//! A starter is rendered from the settings in effect when `init` runs, so stage
//! flags given to `init` keep selecting the same tables on every later run. Each
//! section is serialized with `toml` and preceded by a one-line note.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use pathdiff::diff_paths;
use serde::Serialize;

use crate::{Config, ConfigError, CorpusFormat, PipelineSettings, PreviewSettings};

/// Opening comment of a project file.
const PROJECT_HEADER: &str = "\
# termweight configuration
#
# Settings here override ~/.termweight.toml. Relative paths are resolved
# against the directory containing this file.
";

/// Opening comment of the home-directory file.
const GLOBAL_HEADER: &str = "\
# termweight global configuration
#
# Defaults shared by every project. A project's .termweight.toml takes
# precedence over these values.
";

/// Values a starter file is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Starter {
    /// Stage toggles and lexicon.
    pub pipeline: PipelineSettings,
    /// Corpus file or directory, if one is known.
    pub corpus: Option<PathBuf>,
    /// How the corpus is read.
    pub format: CorpusFormat,
    /// Table directory.
    pub output_dir: PathBuf,
    /// Preview row counts.
    pub preview: PreviewSettings,
}

impl Default for Starter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// `[corpus]` as written to a starter.
#[derive(Serialize)]
struct CorpusSection {
    /// Corpus location, omitted when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// Corpus format.
    format: CorpusFormat,
}

/// `[output]` as written to a starter.
#[derive(Serialize)]
struct OutputSection {
    /// Table directory.
    dir: String,
}

impl Starter {
    /// Takes every value from an effective configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            pipeline: config.pipeline,
            corpus: config.corpus.path.clone(),
            format: config.corpus.format,
            output_dir: config.output.dir.clone(),
            preview: config.preview,
        }
    }

    /// Renders a project file that will live in `dir`.
    ///
    /// Absolute paths inside `dir` are written relative to it.
    pub fn render_project(&self, dir: &Path) -> Result<String, ConfigError> {
        let corpus = CorpusSection {
            path: self
                .corpus
                .as_deref()
                .map(|p| toml_path(p, dir))
                .transpose()?,
            format: self.format,
        };
        let corpus_note = if corpus.path.is_some() {
            "One document per line of a file, or one per file under a directory."
        } else {
            "Set path to a text file (one document per line) or a directory (one per file)."
        };
        let output = OutputSection {
            dir: toml_path(&self.output_dir, dir)?,
        };

        let sections = [
            section("corpus", corpus_note, &corpus)?,
            self.pipeline_section()?,
            section(
                "output",
                "Term-frequency, IDF and TF-IDF tables are written here.",
                &output,
            )?,
            self.preview_section()?,
        ];
        Ok(format!("{PROJECT_HEADER}\n{}", sections.join("\n")))
    }

    /// Renders the home-directory file, which carries stage and preview defaults only.
    pub fn render_global(&self) -> Result<String, ConfigError> {
        let sections = [self.pipeline_section()?, self.preview_section()?];
        Ok(format!("{GLOBAL_HEADER}\n{}", sections.join("\n")))
    }

    /// `[pipeline]`, noting the table names the stages produce.
    fn pipeline_section(&self) -> Result<String, ConfigError> {
        let note = format!(
            "Optional stages. These settings write tf_idf{}.csv.",
            self.pipeline.suffix()
        );
        section("pipeline", &note, &self.pipeline)
    }

    /// `[preview]`.
    fn preview_section(&self) -> Result<String, ConfigError> {
        section(
            "preview",
            "Rows shown per document by `termweight preview`.",
            &self.preview,
        )
    }
}

/// Renders one TOML table with a note above its header.
fn section<T: Serialize>(name: &str, note: &str, body: &T) -> Result<String, ConfigError> {
    Ok(format!("# {note}\n[{name}]\n{}", toml::to_string(body)?))
}

/// A path as it should appear in a file living in `dir`.
fn toml_path(path: &Path, dir: &Path) -> Result<String, ConfigError> {
    let shown = if path.is_absolute() {
        diff_paths(path, dir)
            .filter(|rel| !rel.as_os_str().is_empty() && !rel.starts_with(".."))
            .unwrap_or_else(|| path.to_path_buf())
    } else {
        path.to_path_buf()
    };
    shown
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| ConfigError::NonUtf8Path {
            path: path.to_path_buf(),
        })
}

/// Writes a config file, refusing to replace an existing one unless `overwrite` is set.
pub fn write_config_file(path: &Path, contents: &str, overwrite: bool) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        },
        _ => write_error(e),
    })?;
    file.write_all(contents.as_bytes()).map_err(write_error)
}
