//! Error types for the termweight-stats crate.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// The persisted tables produced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Per-document term counts.
    TermFrequency,
    /// Corpus-wide inverse document frequencies.
    Idf,
    /// Per-document TF-IDF weights.
    TfIdf,
}

impl TableKind {
    /// CSV header row for this table.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::TermFrequency => &["document", "word", "frequency"],
            Self::Idf => &["word", "idf"],
            Self::TfIdf => &["document", "word", "tfidf"],
        }
    }

    /// File name stem, before the pipeline suffix.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::TermFrequency => "token_frequencies",
            Self::Idf => "idf",
            Self::TfIdf => "tf_idf",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TermFrequency => write!(f, "term-frequency"),
            Self::Idf => write!(f, "idf"),
            Self::TfIdf => write!(f, "tf-idf"),
        }
    }
}

/// Errors that can occur while computing or persisting tables.
#[derive(Debug, Error)]
pub enum StatsError {
    /// IDF is undefined without documents.
    #[error("corpus is empty: at least one document is required")]
    EmptyCorpus,

    /// Failed to read a table from disk.
    #[error("failed to read {table} table {path}: {source}")]
    ReadTable {
        /// Which table.
        table: TableKind,
        /// Path to the table file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Failed to write a table to disk.
    #[error("failed to write {table} table {path}: {source}")]
    WriteTable {
        /// Which table.
        table: TableKind,
        /// Path to the table file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A table was readable but its contents are not.
    #[error("invalid {table} table {path}: {message}")]
    InvalidTable {
        /// Which table.
        table: TableKind,
        /// Path to the table file.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to read the corpus.
    #[error("failed to read corpus {path}: {source}")]
    ReadCorpus {
        /// Corpus file or directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
