//! TF-IDF weighting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{IdfTable, TermFrequencyRecord};

/// One row of the TF-IDF table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfRecord {
    /// Document id (position in the corpus).
    #[serde(rename = "document")]
    pub doc_id: usize,
    /// The term.
    #[serde(rename = "word")]
    pub term: String,
    /// `(count / document total) * idf`.
    #[serde(rename = "tfidf")]
    pub weight: f64,
}

/// Combines term frequencies with IDF into per-document weights.
///
/// Documents appear in the order they first occur in `frequencies`. Within a
/// document, rows are sorted by descending weight and ties keep their order from
/// `frequencies`. Terms missing from `idf` get weight 0.
pub fn combine(frequencies: &[TermFrequencyRecord], idf: &IdfTable) -> Vec<TfIdfRecord> {
    let mut documents: IndexMap<usize, Vec<&TermFrequencyRecord>> = IndexMap::new();
    for record in frequencies {
        documents.entry(record.doc_id).or_default().push(record);
    }

    let mut combined = Vec::with_capacity(frequencies.len());
    for (doc_id, rows) in documents {
        let total: usize = rows.iter().map(|r| r.count).sum();
        let mut weighted: Vec<TfIdfRecord> = rows
            .into_iter()
            .map(|r| TfIdfRecord {
                doc_id,
                term: r.term.clone(),
                weight: r.count as f64 / total as f64 * idf.weight(&r.term),
            })
            .collect();
        weighted.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        combined.extend(weighted);
    }
    combined
}
