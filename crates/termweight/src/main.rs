//! Command-line interface for `termweight`, a TF-IDF term weighting tool.
//!
//! `termweight run` preprocesses a corpus and writes term-frequency, IDF and TF-IDF
//! tables as CSV. `termweight preview` shows the highest and lowest weighted terms of
//! each document from a written table.

#![warn(missing_docs)]

mod cli;

use std::{io, process::ExitCode};

use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::{CommandContext, args::parse_cli, commands};

/// Environment variable that overrides the log level chosen with `-v`.
const LOG_ENV: &str = "TERMWEIGHT_LOG";

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };

    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}

/// Installs the stderr log subscriber.
///
/// `TERMWEIGHT_LOG` takes an `EnvFilter` directive and wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
