//! End-to-end pipeline runs.
//!
//! [`run_pipeline`] drives one batch run:
//! 1. Preprocess every document with the enabled stages
//! 2. Build and write the term-frequency table
//! 3. Compute and write the IDF table
//! 4. Read both tables back, combine them, and write the TF-IDF table
//!
//! Table files carry a suffix derived from the enabled stages, so runs with
//! different stage selections write side by side in one output directory.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use termweight_config::PipelineSettings;
use termweight_text::Preprocessor;
use tracing::{debug, info};

use crate::{
    Corpus, DocumentFrequency, IdfTable, StatsError, TableKind, combine, read_idf,
    read_term_frequencies, term_frequencies, write_idf, write_term_frequencies, write_tfidf,
};

/// Locations of the three tables for one stage selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `token_frequencies{suffix}.csv`.
    pub term_frequencies: PathBuf,
    /// `idf{suffix}.csv`.
    pub idf: PathBuf,
    /// `tf_idf{suffix}.csv`.
    pub tfidf: PathBuf,
}

impl OutputPaths {
    /// Derives table paths inside `dir` for the given settings.
    pub fn new(dir: &Path, settings: &PipelineSettings) -> Self {
        let suffix = settings.suffix();
        let file = |table: TableKind| dir.join(format!("{}{suffix}.csv", table.file_stem()));
        Self {
            term_frequencies: file(TableKind::TermFrequency),
            idf: file(TableKind::Idf),
            tfidf: file(TableKind::TfIdf),
        }
    }

    /// Path of a single table.
    pub fn get(&self, table: TableKind) -> &Path {
        match table {
            TableKind::TermFrequency => &self.term_frequencies,
            TableKind::Idf => &self.idf,
            TableKind::TfIdf => &self.tfidf,
        }
    }

    /// All tables with their paths, in the order they are written.
    pub fn iter(&self) -> impl Iterator<Item = (TableKind, &Path)> {
        [TableKind::TermFrequency, TableKind::Idf, TableKind::TfIdf]
            .into_iter()
            .map(|table| (table, self.get(table)))
    }
}

/// Phases of a run, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Normalizing, tokenizing, filtering and stemming documents.
    Preprocess,
    /// Counting terms per document.
    TermFrequency,
    /// Computing document frequencies and IDF.
    Idf,
    /// Combining the persisted tables.
    TfIdf,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preprocess => write!(f, "preprocessing"),
            Self::TermFrequency => write!(f, "counting terms"),
            Self::Idf => write!(f, "computing idf"),
            Self::TfIdf => write!(f, "weighting terms"),
        }
    }
}

/// Statistics from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents in the corpus.
    pub documents: usize,
    /// Documents left without tokens after preprocessing.
    pub empty_documents: usize,
    /// Tokens remaining after preprocessing, over all documents.
    pub tokens: usize,
    /// Distinct terms in the corpus.
    pub distinct_terms: usize,
    /// Rows in the TF-IDF table.
    pub weighted_rows: usize,
    /// Where the tables were written.
    pub paths: OutputPaths,
}

/// Callback for reporting run progress.
pub trait ProgressReporter {
    /// Called when a phase begins.
    fn on_phase_start(&mut self, phase: RunPhase);

    /// Called after a table has been written.
    fn on_table_written(&mut self, table: TableKind, path: &Path, rows: usize);

    /// Called when the run is complete.
    fn on_complete(&mut self, summary: &RunSummary);
}

/// A no-op progress reporter for silent runs.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn on_phase_start(&mut self, _phase: RunPhase) {}
    fn on_table_written(&mut self, _table: TableKind, _path: &Path, _rows: usize) {}
    fn on_complete(&mut self, _summary: &RunSummary) {}
}

/// Runs the full pipeline over `corpus` and writes all three tables into `out_dir`.
///
/// The TF-IDF table is computed from the tables as read back from disk, so it always
/// agrees with what was persisted. Fails with [`StatsError::EmptyCorpus`] before
/// writing anything when the corpus has no documents.
pub fn run_pipeline<R: ProgressReporter>(
    corpus: &Corpus,
    settings: &PipelineSettings,
    out_dir: &Path,
    reporter: &mut R,
) -> Result<RunSummary, StatsError> {
    if corpus.is_empty() {
        return Err(StatsError::EmptyCorpus);
    }

    fs::create_dir_all(out_dir).map_err(|source| StatsError::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let paths = OutputPaths::new(out_dir, settings);
    info!(
        documents = corpus.len(),
        suffix = %settings.suffix(),
        out_dir = %out_dir.display(),
        "starting pipeline run"
    );

    reporter.on_phase_start(RunPhase::Preprocess);
    let documents = Preprocessor::new(settings).process_all(corpus.iter());
    let tokens: usize = documents.iter().map(Vec::len).sum();
    let empty_documents = documents.iter().filter(|d| d.is_empty()).count();
    debug!(tokens, empty_documents, "preprocessed corpus");

    reporter.on_phase_start(RunPhase::TermFrequency);
    let frequencies = term_frequencies(&documents);
    write_term_frequencies(&paths.term_frequencies, &frequencies)?;
    reporter.on_table_written(
        TableKind::TermFrequency,
        &paths.term_frequencies,
        frequencies.len(),
    );
    debug!(
        rows = frequencies.len(),
        path = %paths.term_frequencies.display(),
        "wrote term frequencies"
    );

    reporter.on_phase_start(RunPhase::Idf);
    let df = DocumentFrequency::from_documents(&documents);
    let idf = IdfTable::from_frequencies(&df)?;
    write_idf(&paths.idf, &idf)?;
    reporter.on_table_written(TableKind::Idf, &paths.idf, idf.len());
    debug!(rows = idf.len(), path = %paths.idf.display(), "wrote idf");

    reporter.on_phase_start(RunPhase::TfIdf);
    let stored_frequencies = read_term_frequencies(&paths.term_frequencies)?;
    let stored_idf = read_idf(&paths.idf)?;
    let weighted = combine(&stored_frequencies, &stored_idf);
    write_tfidf(&paths.tfidf, &weighted)?;
    reporter.on_table_written(TableKind::TfIdf, &paths.tfidf, weighted.len());
    debug!(rows = weighted.len(), path = %paths.tfidf.display(), "wrote tf-idf");

    let summary = RunSummary {
        documents: corpus.len(),
        empty_documents,
        tokens,
        distinct_terms: df.len(),
        weighted_rows: weighted.len(),
        paths,
    };
    info!(
        tokens = summary.tokens,
        distinct_terms = summary.distinct_terms,
        "pipeline run complete"
    );
    reporter.on_complete(&summary);
    Ok(summary)
}
