//! CSV persistence for the three tables.
//!
//! Every table file starts with its header row, even when it has no data rows.
//! Floats are written in shortest round-trip form, so reading a table back yields
//! the exact values that were written and reruns produce identical bytes.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{IdfRecord, IdfTable, StatsError, TableKind, TermFrequencyRecord, TfIdfRecord};

/// Writes the term-frequency table.
pub fn write_term_frequencies(
    path: &Path,
    records: &[TermFrequencyRecord],
) -> Result<(), StatsError> {
    write_records(path, TableKind::TermFrequency, records)
}

/// Reads the term-frequency table, rejecting non-positive counts.
pub fn read_term_frequencies(path: &Path) -> Result<Vec<TermFrequencyRecord>, StatsError> {
    let table = TableKind::TermFrequency;
    let records: Vec<TermFrequencyRecord> = read_records(path, table)?;
    if let Some(bad) = records.iter().find(|r| r.count == 0) {
        return Err(invalid(
            table,
            path,
            format!(
                "frequency of '{}' in document {} must be at least 1",
                bad.term, bad.doc_id
            ),
        ));
    }
    Ok(records)
}

/// Writes the IDF table sorted by descending idf.
pub fn write_idf(path: &Path, idf: &IdfTable) -> Result<(), StatsError> {
    write_records(path, TableKind::Idf, &idf.records())
}

/// Reads the IDF table, rejecting negative or non-finite values.
pub fn read_idf(path: &Path) -> Result<IdfTable, StatsError> {
    let table = TableKind::Idf;
    let records: Vec<IdfRecord> = read_records(path, table)?;
    if let Some(bad) = records.iter().find(|r| !r.idf.is_finite() || r.idf < 0.0) {
        return Err(invalid(
            table,
            path,
            format!("idf of '{}' must be a non-negative number, got {}", bad.term, bad.idf),
        ));
    }
    Ok(IdfTable::from_records(records))
}

/// Writes the TF-IDF table.
pub fn write_tfidf(path: &Path, records: &[TfIdfRecord]) -> Result<(), StatsError> {
    write_records(path, TableKind::TfIdf, records)
}

/// Reads the TF-IDF table.
pub fn read_tfidf(path: &Path) -> Result<Vec<TfIdfRecord>, StatsError> {
    read_records(path, TableKind::TfIdf)
}

/// Writes a header row followed by one row per record.
fn write_records<T: Serialize>(
    path: &Path,
    table: TableKind,
    records: &[T],
) -> Result<(), StatsError> {
    let write_err = |source: csv::Error| StatsError::WriteTable {
        table,
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(table.headers()).map_err(write_err)?;
    for record in records {
        writer.serialize(record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))
}

/// Reads all rows of a table after checking its header.
fn read_records<T: DeserializeOwned>(path: &Path, table: TableKind) -> Result<Vec<T>, StatsError> {
    let read_err = |source: csv::Error| StatsError::ReadTable {
        table,
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;
    let headers = reader.headers().map_err(read_err)?;
    if headers.iter().ne(table.headers().iter().copied()) {
        return Err(invalid(
            table,
            path,
            format!(
                "expected header '{}', found '{}'",
                table.headers().join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(read_err)
}

/// Builds an `InvalidTable` error.
fn invalid(table: TableKind, path: &Path, message: String) -> StatsError {
    StatsError::InvalidTable {
        table,
        path: path.to_path_buf(),
        message,
    }
}
