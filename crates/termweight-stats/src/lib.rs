//! Corpus statistics for termweight.
//!
//! Turns preprocessed documents into three tables:
//!
//! - **Term frequency**: per-document term counts ([`term_frequencies`])
//! - **IDF**: `ln(N / df)` per term over the corpus ([`IdfTable`])
//! - **TF-IDF**: relative frequency times IDF per document ([`combine`])
//!
//! [`run_pipeline`] runs preprocessing and all three computations, persisting each
//! table as CSV. The TF-IDF step consumes the persisted tables, so the files on disk
//! are the hand-off between phases.

#![warn(missing_docs)]

mod corpus;
mod error;
mod frequency;
mod idf;
mod pipeline;
mod preview;
mod table;
mod tfidf;

pub use corpus::Corpus;
pub use error::{StatsError, TableKind};
pub use frequency::{TermFrequencyRecord, count_terms, term_frequencies};
pub use idf::{DocumentFrequency, IdfRecord, IdfTable};
pub use pipeline::{
    OutputPaths, ProgressReporter, RunPhase, RunSummary, SilentReporter, run_pipeline,
};
pub use preview::{DocumentPreview, preview};
pub use table::{
    read_idf, read_term_frequencies, read_tfidf, write_idf, write_term_frequencies, write_tfidf,
};
pub use tfidf::{TfIdfRecord, combine};
