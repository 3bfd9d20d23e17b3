//! Rendering and JSON serialization for CLI output.

use std::{path::Path, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use termweight_config::{PipelineSettings, Stage};
use termweight_stats::{DocumentPreview, RunSummary, TfIdfRecord};

/// ANSI escape codes for terminal styling.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Green foreground.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a section header (bold cyan).
pub fn header(text: &str) -> String {
    format!("{}{}{text}{}", colors::BOLD, colors::CYAN, colors::RESET)
}

/// Formats a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{text}{}", colors::BOLD, colors::RESET)
}

/// Formats secondary text (dim).
pub fn dim(text: &str) -> String {
    format!("{}{text}{}", colors::DIM, colors::RESET)
}

/// Formats a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{text}{}", colors::GREEN, colors::RESET)
}

/// Formats a warning message (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{text}{}", colors::YELLOW, colors::RESET)
}

/// Lists the enabled stages, or notes that only tokenization runs.
pub fn describe_stages(settings: &PipelineSettings) -> String {
    let stages = settings.enabled_stages();
    if stages.is_empty() {
        return "tokenize only".to_string();
    }
    stages
        .iter()
        .map(|&stage| match stage {
            Stage::RemoveStopwords => format!("{stage} ({})", settings.stopwords),
            _ => stage.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decimal places shown for weights in preview tables.
const WEIGHT_PRECISION: usize = 6;

/// Table paths in JSON run output.
#[derive(Serialize)]
struct JsonTables<'a> {
    /// Term-frequency table.
    term_frequencies: &'a Path,
    /// IDF table.
    idf: &'a Path,
    /// TF-IDF table.
    tfidf: &'a Path,
}

/// JSON output for `termweight run`.
#[derive(Serialize)]
struct JsonRunSummary<'a> {
    /// Suffix shared by the three table names.
    suffix: &'a str,
    /// Documents in the corpus.
    documents: usize,
    /// Documents without tokens after preprocessing.
    empty_documents: usize,
    /// Tokens after preprocessing.
    tokens: usize,
    /// Distinct terms in the corpus.
    distinct_terms: usize,
    /// Rows in the TF-IDF table.
    weighted_rows: usize,
    /// Where the tables were written.
    tables: JsonTables<'a>,
}

/// Prints a value as pretty JSON, failing with a consistent error.
fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a run summary as JSON.
pub fn output_run_json(summary: &RunSummary, suffix: &str) -> ExitCode {
    print_json(&run_json(summary, suffix))
}

/// Builds the JSON view of a run summary.
fn run_json<'a>(summary: &'a RunSummary, suffix: &'a str) -> JsonRunSummary<'a> {
    JsonRunSummary {
        suffix,
        documents: summary.documents,
        empty_documents: summary.empty_documents,
        tokens: summary.tokens,
        distinct_terms: summary.distinct_terms,
        weighted_rows: summary.weighted_rows,
        tables: JsonTables {
            term_frequencies: &summary.paths.term_frequencies,
            idf: &summary.paths.idf,
            tfidf: &summary.paths.tfidf,
        },
    }
}

/// Prints previews as JSON.
pub fn output_previews_json(previews: &[DocumentPreview]) -> ExitCode {
    print_json(previews)
}

/// Prints previews as one pair of tables per document.
pub fn output_previews(previews: &[DocumentPreview], source: &str) -> ExitCode {
    println!("{}", dim(source));
    println!();

    if previews.is_empty() {
        println!("{}", dim("No weighted terms in table."));
        return ExitCode::SUCCESS;
    }

    for preview in previews {
        println!("{}", header(&format!("Document {}", preview.document)));
        print_rows("Top", &preview.top);
        print_rows("Bottom", &preview.bottom);
        println!();
    }

    ExitCode::SUCCESS
}

/// Prints one labelled block of rows, skipping empty blocks.
fn print_rows(label: &str, rows: &[TfIdfRecord]) {
    if rows.is_empty() {
        return;
    }
    println!("{}", subheader(&format!("{label} {}:", rows.len())));
    println!("{}", weight_table(rows));
}

/// Builds a word/weight table.
fn weight_table(rows: &[TfIdfRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Word", "TF-IDF"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.term),
            Cell::new(format_weight(row.weight)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Formats a weight for display.
fn format_weight(weight: f64) -> String {
    format!("{weight:.prec$}", prec = WEIGHT_PRECISION)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termweight_stats::OutputPaths;

    use super::*;

    /// Strips ANSI escape sequences.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            if c == '\x1b' {
                in_escape = true;
            } else if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn styles_wrap_and_reset() {
        assert_eq!(strip_ansi(&header("Document 0")), "Document 0");
        assert!(subheader("x").ends_with(colors::RESET));
        assert!(warning("careful").starts_with(colors::YELLOW));
    }

    #[test]
    fn describes_enabled_stages() {
        assert_eq!(
            describe_stages(&PipelineSettings::default()),
            "normalize, remove-stopwords (standard), stem"
        );
        assert_eq!(
            describe_stages(&PipelineSettings::tokenize_only()),
            "tokenize only"
        );
    }

    #[test]
    fn weights_use_fixed_precision() {
        assert_eq!(format_weight(0.0), "0.000000");
        assert_eq!(format_weight(2f64.ln() / 3.0), "0.231049");
    }

    #[test]
    fn weight_table_lists_rows_in_order() {
        let rows = vec![
            TfIdfRecord {
                doc_id: 0,
                term: "cat".to_string(),
                weight: 0.5,
            },
            TfIdfRecord {
                doc_id: 0,
                term: "sat".to_string(),
                weight: 0.0,
            },
        ];
        let rendered = weight_table(&rows).to_string();
        let cat = rendered.find("cat").unwrap();
        let sat = rendered.find("sat").unwrap();
        assert!(rendered.contains("TF-IDF"));
        assert!(rendered.contains("0.500000"));
        assert!(cat < sat);
    }

    #[test]
    fn run_json_includes_tables() {
        let summary = RunSummary {
            documents: 2,
            empty_documents: 0,
            tokens: 5,
            distinct_terms: 4,
            weighted_rows: 5,
            paths: OutputPaths::new(&PathBuf::from("out"), &PipelineSettings::default()),
        };
        let json = serde_json::to_value(run_json(&summary, "_c_sw_st")).unwrap();
        assert_eq!(json["suffix"], "_c_sw_st");
        assert_eq!(json["tables"]["tfidf"], "out/tf_idf_c_sw_st.csv");
    }
}
