//! Implementation of `termweight preview`.

use std::process::ExitCode;

use termweight_config::format_path_for_display;
use termweight_stats::{OutputPaths, preview, read_tfidf};

use crate::cli::{
    args::PreviewCommand,
    context::CommandContext,
    output::{output_previews, output_previews_json},
};

/// Shows the top and bottom weighted rows of each document in a TF-IDF table.
pub fn run(ctx: &CommandContext, cmd: &PreviewCommand) -> ExitCode {
    let path = match &cmd.table {
        Some(table) => ctx.resolve(table),
        None => {
            let settings = ctx.pipeline_settings(&cmd.stages);
            OutputPaths::new(&ctx.output_dir(cmd.out_dir.as_deref()), &settings).tfidf
        }
    };

    if !path.is_file() {
        eprintln!(
            "error: no TF-IDF table at {}",
            format_path_for_display(&path, Some(&ctx.cwd))
        );
        if cmd.table.is_none() {
            eprintln!("run 'termweight run' with the same stage flags first");
        }
        return ExitCode::FAILURE;
    }

    let records = match read_tfidf(&path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let top = cmd.top.unwrap_or(ctx.config.preview.top);
    let bottom = cmd.bottom.unwrap_or(ctx.config.preview.bottom);
    let previews = preview(&records, top, bottom);

    if cmd.json {
        output_previews_json(&previews)
    } else {
        output_previews(&previews, &format_path_for_display(&path, Some(&ctx.cwd)))
    }
}
