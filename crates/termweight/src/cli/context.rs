//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use termweight_config::{CONFIG_FILENAME, Config, PipelineSettings};

use crate::cli::args::StageArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Resolves a path given on the command line against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    /// Configured pipeline settings with command-line stage flags applied.
    pub fn pipeline_settings(&self, stages: &StageArgs) -> PipelineSettings {
        stages.apply(self.config.pipeline)
    }

    /// Output directory from the command line, falling back to configuration.
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(dir) => self.resolve(dir),
            None => self.resolve(&self.config.output.dir),
        }
    }

    /// Corpus path from the command line, falling back to configuration.
    pub fn corpus_path(&self, arg: Option<&Path>) -> Result<PathBuf, ExitCode> {
        if let Some(path) = arg {
            return Ok(self.resolve(path));
        }
        match &self.config.corpus.path {
            Some(path) => Ok(self.resolve(path)),
            None => {
                eprintln!("error: no corpus given");
                eprintln!("pass a corpus path or set [corpus] path in {CONFIG_FILENAME}");
                Err(ExitCode::FAILURE)
            }
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
