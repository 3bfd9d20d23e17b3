//! Document frequency and inverse document frequency.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::StatsError;

/// Number of documents containing each term.
///
/// Terms are kept in the order they first occur across the corpus.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequency {
    /// Term to document count.
    counts: IndexMap<String, usize>,
    /// Total documents seen, including those without tokens.
    documents: usize,
}

impl DocumentFrequency {
    /// Counts, for each term, how many documents contain it.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for tokens in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                if seen.insert(token) {
                    *counts.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }
        Self {
            counts,
            documents: documents.len(),
        }
    }

    /// Number of documents containing `term`.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.counts.get(term).copied()
    }

    /// Total number of documents.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no document had any term.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates (term, document count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, &n)| (t.as_str(), n))
    }
}

/// One row of the IDF table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfRecord {
    /// The term.
    #[serde(rename = "word")]
    pub term: String,
    /// `ln(N / df)`.
    pub idf: f64,
}

/// Inverse document frequency per term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    /// Term to idf, in first-seen order.
    weights: IndexMap<String, f64>,
}

impl IdfTable {
    /// Computes `ln(N / df)` for every term.
    ///
    /// Fails with [`StatsError::EmptyCorpus`] when there are no documents.
    pub fn from_frequencies(df: &DocumentFrequency) -> Result<Self, StatsError> {
        if df.documents() == 0 {
            return Err(StatsError::EmptyCorpus);
        }
        let n = df.documents() as f64;
        let weights = df
            .iter()
            .map(|(term, count)| (term.to_string(), (n / count as f64).ln()))
            .collect();
        Ok(Self { weights })
    }

    /// Computes the table directly from preprocessed documents.
    pub fn compute(documents: &[Vec<String>]) -> Result<Self, StatsError> {
        Self::from_frequencies(&DocumentFrequency::from_documents(documents))
    }

    /// Builds a table from persisted rows.
    pub fn from_records(records: impl IntoIterator<Item = IdfRecord>) -> Self {
        Self {
            weights: records.into_iter().map(|r| (r.term, r.idf)).collect(),
        }
    }

    /// IDF of `term`, if it occurs in the corpus.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// IDF of `term`, or 0 for unknown terms.
    pub fn weight(&self, term: &str) -> f64 {
        self.get(term).unwrap_or(0.0)
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the table has no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Rows sorted by descending idf; ties keep first-seen order.
    pub fn records(&self) -> Vec<IdfRecord> {
        let mut records: Vec<IdfRecord> = self
            .weights
            .iter()
            .map(|(term, &idf)| IdfRecord {
                term: term.clone(),
                idf,
            })
            .collect();
        records.sort_by(|a, b| b.idf.total_cmp(&a.idf));
        records
    }
}
