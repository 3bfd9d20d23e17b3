//! Corpus loading.
//!
//! A corpus is an ordered list of documents. A document's position is its id for
//! the whole run, so loaders must be deterministic: line corpora keep file order and
//! directory corpora are sorted by relative path.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use termweight_config::CorpusFormat;
use tracing::debug;
use walkdir::WalkDir;

use crate::StatsError;

/// An ordered collection of raw documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Document texts, indexed by document id.
    documents: Vec<String>,
}

impl Corpus {
    /// Creates a corpus from in-memory documents.
    pub fn new(documents: Vec<String>) -> Self {
        Self { documents }
    }

    /// Loads a corpus according to the configured format.
    ///
    /// `Auto` reads a directory tree when `path` is a directory and a line file otherwise.
    pub fn load(path: &Path, format: CorpusFormat) -> Result<Self, StatsError> {
        match format {
            CorpusFormat::Lines => Self::from_lines(path),
            CorpusFormat::Directory => Self::from_dir(path),
            CorpusFormat::Auto if path.is_dir() => Self::from_dir(path),
            CorpusFormat::Auto => Self::from_lines(path),
        }
    }

    /// Reads one document per non-blank line of a text file.
    pub fn from_lines(path: &Path) -> Result<Self, StatsError> {
        let text = read_lossy(path)?;
        let documents: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        debug!(path = %path.display(), documents = documents.len(), "loaded line corpus");
        Ok(Self { documents })
    }

    /// Reads every regular file under a directory as one document.
    ///
    /// Hidden files and directories are skipped. Symlinks are not followed. Files are
    /// ordered by their path relative to `root`.
    pub fn from_dir(root: &Path) -> Result<Self, StatsError> {
        let mut files: Vec<(PathBuf, PathBuf)> = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        {
            let entry = entry.map_err(|e| StatsError::ReadCorpus {
                path: root.to_path_buf(),
                source: io::Error::from(e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let abs_path = entry.path().to_path_buf();
            let rel_path = abs_path
                .strip_prefix(root)
                .map_or_else(|_| abs_path.clone(), Path::to_path_buf);
            files.push((rel_path, abs_path));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));

        let documents = files
            .iter()
            .map(|(_, abs_path)| read_lossy(abs_path))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(path = %root.display(), documents = documents.len(), "loaded directory corpus");
        Ok(Self { documents })
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Corpus {
    fn from(documents: Vec<String>) -> Self {
        Self::new(documents)
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Reads a file, replacing invalid UTF-8 sequences.
fn read_lossy(path: &Path) -> Result<String, StatsError> {
    let bytes = fs::read(path).map_err(|source| StatsError::ReadCorpus {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
