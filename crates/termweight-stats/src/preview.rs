//! Per-document top and bottom rows of a TF-IDF table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::TfIdfRecord;

/// The highest- and lowest-weighted rows of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentPreview {
    /// Document id.
    pub document: usize,
    /// Up to `top` highest-weighted rows, descending.
    pub top: Vec<TfIdfRecord>,
    /// Up to `bottom` lowest-weighted rows, still in descending order.
    pub bottom: Vec<TfIdfRecord>,
}

/// Groups rows by document (ascending id) and keeps the head and tail of each.
///
/// Rows are re-sorted by descending weight within a document, keeping file order for
/// ties, so hand-edited tables preview the same way as generated ones. A document
/// shorter than `top + bottom` shows some rows in both lists.
pub fn preview(records: &[TfIdfRecord], top: usize, bottom: usize) -> Vec<DocumentPreview> {
    let mut documents: BTreeMap<usize, Vec<&TfIdfRecord>> = BTreeMap::new();
    for record in records {
        documents.entry(record.doc_id).or_default().push(record);
    }

    documents
        .into_iter()
        .map(|(document, mut rows)| {
            rows.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            let tail_start = rows.len().saturating_sub(bottom);
            DocumentPreview {
                document,
                top: rows.iter().take(top).map(|&r| r.clone()).collect(),
                bottom: rows[tail_start..].iter().map(|&r| r.clone()).collect(),
            }
        })
        .collect()
}
