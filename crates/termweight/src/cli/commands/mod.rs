//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod preview;
pub mod run;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Run(cmd) => run::run(ctx, &cmd),
        Commands::Preview(cmd) => preview::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
    }
}
