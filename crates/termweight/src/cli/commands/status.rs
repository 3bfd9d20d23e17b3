//! Implementation of `termweight status`.

use std::process::ExitCode;

use termweight_config::{ConfigScope, ConfigWarning, format_path_for_display};
use termweight_stats::OutputPaths;

use crate::cli::{
    context::CommandContext,
    output::{describe_stages, dim, subheader, warning},
};

/// Shows configuration files, pipeline, corpus, outputs and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    if config.sources.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("termweight init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for source in &config.sources {
        let display_path = format_path_for_display(&source.path, Some(cwd));
        let mut marks = Vec::new();
        if source.scope == ConfigScope::Global {
            marks.push("(global)");
        }
        if source.root {
            marks.push("(root)");
        }
        if marks.is_empty() {
            println!("   {display_path}");
        } else {
            println!("   {display_path} {}", dim(&marks.join(" ")));
        }
    }
    println!();

    let settings = config.pipeline;

    println!("{}", subheader("Pipeline:"));
    println!("   {}", describe_stages(&settings));
    let suffix = settings.suffix();
    if suffix.is_empty() {
        println!("   {}", dim("(no suffix)"));
    } else {
        println!("   {}", dim(&format!("suffix {suffix}")));
    }
    println!();

    println!("{}", subheader("Corpus:"));
    match &config.corpus.path {
        Some(path) => {
            let display_path = format_path_for_display(path, config.config_root.as_deref());
            let format = dim(&format!("({})", config.corpus.format));
            if path.exists() {
                println!("   {display_path} {format}");
            } else {
                println!("   {display_path} {format} {}", warning("[missing]"));
            }
        }
        None => println!("   {}", dim("(none configured)")),
    }
    println!();

    println!("{}", subheader("Outputs:"));
    let paths = OutputPaths::new(&ctx.output_dir(None), &settings);
    for (table, path) in paths.iter() {
        let display_path = format_path_for_display(path, Some(cwd));
        let state = if path.is_file() {
            dim("[written]")
        } else {
            dim("[not yet written]")
        };
        println!("   {table}: {display_path} {state}");
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoCorpusConfigured => {
                println!("{}", dim("Hint: set [corpus] path in .termweight.toml"));
            }
            ConfigWarning::CorpusNotDirectory { .. } | ConfigWarning::CorpusNotFile { .. } => {
                println!("{}", dim("Hint: set [corpus] format to \"auto\""));
            }
            _ => {}
        }
    }
}
