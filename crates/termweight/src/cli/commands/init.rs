//! Implementation of `termweight init`.

use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use termweight_config::{
    CONFIG_FILENAME, Config, ConfigError, Starter, format_path_for_display, global_config_path,
    write_config_file,
};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{describe_stages, dim, subheader},
};

/// Writes a `.termweight.toml` recording the corpus, stages and output directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;
    let home_config = global_config_path();
    let in_home = home_config
        .as_deref()
        .and_then(Path::parent)
        .is_some_and(|home| home == cwd);
    let use_global = cmd.global || in_home;

    let config_path = if use_global {
        match home_config {
            Some(path) => path,
            None => {
                eprintln!("error: {}", ConfigError::NoHomeDirectory);
                return ExitCode::FAILURE;
            }
        }
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    let starter = starter(ctx, cmd, use_global);
    let rendered = if use_global {
        starter.render_global()
    } else {
        starter.render_project(cwd)
    };
    let written =
        rendered.and_then(|contents| write_config_file(&config_path, &contents, cmd.force));
    if let Err(e) = written {
        eprintln!("error: {e}");
        if matches!(e, ConfigError::AlreadyExists { .. }) {
            eprintln!("use --force to overwrite");
        }
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    println!();
    println!("{}", subheader("Pipeline:"));
    println!("   {}", describe_stages(&starter.pipeline));
    println!(
        "   {}",
        dim(&format!("tables tf_idf{}.csv", starter.pipeline.suffix()))
    );

    if use_global {
        return ExitCode::SUCCESS;
    }

    println!();
    println!("{}", subheader("Corpus:"));
    match &starter.corpus {
        Some(path) => println!(
            "   {} {}",
            format_path_for_display(path, Some(cwd)),
            dim(&format!("({})", starter.format))
        ),
        None => println!("   {}", dim("(none yet, set [corpus] path)")),
    }

    match update_gitignore(cwd, &starter.output_dir) {
        Ok(Some(entry)) => println!("Added {entry} to .gitignore"),
        Ok(None) => {}
        Err(e) => eprintln!("warning: could not update .gitignore: {e}"),
    }

    ExitCode::SUCCESS
}

/// Starting values: the settings in effect here, overridden by the command's flags.
///
/// The global file starts from built-in defaults. An unreadable project config is
/// reported and ignored so `init --force` can replace it.
fn starter(ctx: &CommandContext, cmd: &InitCommand, use_global: bool) -> Starter {
    let base = if use_global {
        Config::default()
    } else {
        Config::load(&ctx.cwd).unwrap_or_else(|e| {
            eprintln!("warning: ignoring existing configuration: {e}");
            Config::default()
        })
    };

    let mut starter = Starter::from_config(&base);
    starter.pipeline = cmd.stages.apply(starter.pipeline);
    if let Some(corpus) = &cmd.corpus {
        starter.corpus = Some(ctx.resolve(corpus));
    }
    if let Some(format) = cmd.format {
        starter.format = format;
    }
    if let Some(dir) = &cmd.out_dir {
        starter.output_dir = ctx.resolve(dir);
    }
    starter
}

/// Lists the table directory in the project's `.gitignore`, if that file exists.
///
/// Returns the entry added, or `None` when the file is absent, already lists the
/// directory, or the directory lies outside the project.
fn update_gitignore(project: &Path, output_dir: &Path) -> io::Result<Option<String>> {
    let gitignore_path = project.join(".gitignore");
    if !gitignore_path.is_file() {
        return Ok(None);
    }

    let shown = format_path_for_display(&project.join(output_dir), Some(project));
    let relative = Path::new(&shown);
    if relative.is_absolute() || relative.starts_with("..") {
        return Ok(None);
    }
    let entry = shown.trim_end_matches('/');

    let contents = fs::read_to_string(&gitignore_path)?;
    if contents.lines().any(|line| line.trim().trim_matches('/') == entry) {
        return Ok(None);
    }

    let mut file = fs::OpenOptions::new().append(true).open(&gitignore_path)?;
    if !contents.is_empty() && !contents.ends_with('\n') {
        writeln!(file)?;
    }
    let pattern = format!("{entry}/");
    writeln!(file, "{pattern}")?;

    Ok(Some(pattern))
}
