//! Clap argument definitions for the `termweight` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use termweight_config::{CorpusFormat, PipelineSettings, StopwordLexicon};

/// Parse a corpus format from a string.
fn parse_format(s: &str) -> Result<CorpusFormat, String> {
    s.parse()
}

/// Parse a stopword lexicon from a string.
fn parse_lexicon(s: &str) -> Result<StopwordLexicon, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "termweight", version)]
#[command(about = "TF-IDF term weighting for plain-text corpora")]
pub struct Cli {
    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the configured pipeline stages.
///
/// Each stage has an on and an off flag; the last one given wins.
#[derive(Args, Debug, Clone, Default)]
pub struct StageArgs {
    /// Lowercase and strip punctuation before tokenizing
    #[arg(long, overrides_with = "no_normalize")]
    pub normalize: bool,

    /// Tokenize the raw text
    #[arg(long, overrides_with = "normalize")]
    pub no_normalize: bool,

    /// Remove stopwords after tokenizing
    #[arg(long, overrides_with = "keep_stopwords")]
    pub remove_stopwords: bool,

    /// Keep stopwords
    #[arg(long, overrides_with = "remove_stopwords")]
    pub keep_stopwords: bool,

    /// Apply the Porter stemmer
    #[arg(long, overrides_with = "no_stem")]
    pub stem: bool,

    /// Skip stemming
    #[arg(long, overrides_with = "stem")]
    pub no_stem: bool,

    /// Stopword lexicon: standard or extended [default: standard]
    #[arg(long, value_parser = parse_lexicon)]
    pub stopwords: Option<StopwordLexicon>,
}

impl StageArgs {
    /// Applies the flags on top of configured settings.
    pub fn apply(&self, mut settings: PipelineSettings) -> PipelineSettings {
        if let Some(v) = toggle(self.normalize, self.no_normalize) {
            settings.normalize = v;
        }
        if let Some(v) = toggle(self.remove_stopwords, self.keep_stopwords) {
            settings.remove_stopwords = v;
        }
        if let Some(v) = toggle(self.stem, self.no_stem) {
            settings.stem = v;
        }
        if let Some(lexicon) = self.stopwords {
            settings.stopwords = lexicon;
        }
        settings
    }
}

/// Collapses an on/off flag pair into an override.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Arguments for `termweight run`.
#[derive(Args, Debug, Clone)]
pub struct RunCommand {
    /// Corpus file or directory [default: [corpus] path from config]
    pub corpus: Option<PathBuf>,

    /// How to read the corpus: auto, lines or directory [default: auto]
    #[arg(long, value_parser = parse_format)]
    pub format: Option<CorpusFormat>,

    /// Directory for the output tables [default: outputs]
    #[arg(short = 'o', long)]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    /// Stage overrides.
    pub stages: StageArgs,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `termweight preview`.
#[derive(Args, Debug, Clone)]
pub struct PreviewCommand {
    /// TF-IDF table to read [default: the table for the selected stages]
    pub table: Option<PathBuf>,

    /// Highest-weighted rows per document [default: 5]
    #[arg(long)]
    pub top: Option<usize>,

    /// Lowest-weighted rows per document [default: 5]
    #[arg(long)]
    pub bottom: Option<usize>,

    /// Directory holding the tables when no table is given [default: outputs]
    #[arg(short = 'o', long)]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    /// Stage overrides, used to pick the table suffix.
    pub stages: StageArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `termweight init`.
///
/// The new file starts from the settings already in effect, with these flags applied.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Corpus file or directory to record in the new config
    pub corpus: Option<PathBuf>,

    /// How to read the corpus: auto, lines or directory
    #[arg(long, value_parser = parse_format)]
    pub format: Option<CorpusFormat>,

    /// Directory for the output tables
    #[arg(short = 'o', long)]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    /// Stage settings to record.
    pub stages: StageArgs,

    /// Create global ~/.termweight.toml instead
    #[arg(long, conflicts_with_all = ["corpus", "format", "out_dir"])]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `termweight` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compute term-frequency, IDF and TF-IDF tables for a corpus
    #[command(after_help = "\
STAGES:
  normalize          lowercase, strip ASCII punctuation     (suffix code c)
  remove-stopwords   drop English function words            (suffix code sw, swx if extended)
  stem               Porter stemming                        (suffix code st)

OUTPUTS:
  token_frequencies{suffix}.csv   document,word,frequency
  idf{suffix}.csv                 word,idf
  tf_idf{suffix}.csv              document,word,tfidf

EXAMPLES:
  termweight run corpus.txt
  termweight run docs/ --format directory -o tables
  termweight run corpus.txt --no-stem --keep-stopwords")]
    Run(RunCommand),

    /// Show the highest and lowest weighted terms per document
    Preview(PreviewCommand),

    /// Write a .termweight.toml recording the corpus and stages to use
    #[command(after_help = "\
EXAMPLES:
  termweight init
  termweight init corpus.txt --format lines --no-stem
  termweight init --global --stopwords extended")]
    Init(InitCommand),

    /// Show configuration files, pipeline, outputs and warnings
    Status,

    /// Show effective configuration settings
    Config,
}

impl Commands {
    /// Returns true if the command needs the configuration loaded.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses the command line, exiting on error or help.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
