//! Per-document term counting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of the term-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequencyRecord {
    /// Document id (position in the corpus).
    #[serde(rename = "document")]
    pub doc_id: usize,
    /// The term.
    #[serde(rename = "word")]
    pub term: String,
    /// Occurrences of the term in the document, at least 1.
    #[serde(rename = "frequency")]
    pub count: usize,
}

/// Counts the terms of one document.
///
/// Rows are ordered by descending count; equal counts keep the order in which the
/// terms first occur in the document.
pub fn count_terms(doc_id: usize, tokens: &[String]) -> Vec<TermFrequencyRecord> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut records: Vec<TermFrequencyRecord> = counts
        .into_iter()
        .map(|(term, count)| TermFrequencyRecord {
            doc_id,
            term: term.to_string(),
            count,
        })
        .collect();
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records
}

/// Builds the term-frequency table for a whole corpus, documents in id order.
///
/// Documents without tokens contribute no rows.
pub fn term_frequencies(documents: &[Vec<String>]) -> Vec<TermFrequencyRecord> {
    documents
        .iter()
        .enumerate()
        .flat_map(|(doc_id, tokens)| count_terms(doc_id, tokens))
        .collect()
}
