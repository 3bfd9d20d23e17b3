//! Implementation of `termweight run`.

use std::{path::Path, process::ExitCode};

use termweight_config::format_path_for_display;
use termweight_stats::{
    Corpus, ProgressReporter, RunPhase, RunSummary, SilentReporter, TableKind, run_pipeline,
};

use crate::cli::{
    args::RunCommand,
    context::CommandContext,
    output::{describe_stages, dim, output_run_json, subheader, success},
};

/// Prints run progress to stdout.
struct TerminalReporter<'a> {
    /// Base for displaying table paths.
    cwd: &'a Path,
}

impl ProgressReporter for TerminalReporter<'_> {
    fn on_phase_start(&mut self, phase: RunPhase) {
        println!("{}", dim(&format!("{phase}...")));
    }

    fn on_table_written(&mut self, table: TableKind, path: &Path, rows: usize) {
        println!(
            "   wrote {table} table {} {}",
            format_path_for_display(path, Some(self.cwd)),
            dim(&format!("({rows} rows)"))
        );
    }

    fn on_complete(&mut self, summary: &RunSummary) {
        println!();
        println!(
            "{} {} documents, {} tokens, {} distinct terms",
            success("Done:"),
            summary.documents,
            summary.tokens,
            summary.distinct_terms
        );
        if summary.empty_documents > 0 {
            println!(
                "{}",
                dim(&format!(
                    "{} documents had no tokens after preprocessing",
                    summary.empty_documents
                ))
            );
        }
    }
}

/// Loads the corpus, runs the pipeline and writes the three tables.
pub fn run(ctx: &CommandContext, cmd: &RunCommand) -> ExitCode {
    let corpus_path = match ctx.corpus_path(cmd.corpus.as_deref()) {
        Ok(path) => path,
        Err(code) => return code,
    };
    let format = cmd.format.unwrap_or(ctx.config.corpus.format);
    let settings = ctx.pipeline_settings(&cmd.stages);
    let out_dir = ctx.output_dir(cmd.out_dir.as_deref());

    let corpus = match Corpus::load(&corpus_path, format) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if cmd.json {
        run_pipeline(&corpus, &settings, &out_dir, &mut SilentReporter)
    } else {
        println!(
            "{} {} {}",
            subheader("Corpus:"),
            format_path_for_display(&corpus_path, Some(&ctx.cwd)),
            dim(&format!("({} documents)", corpus.len()))
        );
        println!("{} {}", subheader("Stages:"), describe_stages(&settings));
        println!();
        let mut reporter = TerminalReporter { cwd: &ctx.cwd };
        run_pipeline(&corpus, &settings, &out_dir, &mut reporter)
    };

    match result {
        Ok(summary) if cmd.json => output_run_json(&summary, &settings.suffix()),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
