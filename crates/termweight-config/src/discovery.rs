//! Locating the `.termweight.toml` files that apply to a directory.
//!
//! Project files are collected from the working directory upward. A file with
//! `root = true` ends the search and shuts out the home-directory file. Every file
//! is parsed exactly once, here, and the corpus and output paths it declares are
//! resolved against its own directory before any merging happens.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{
    ConfigError,
    parse::{RawConfig, parse_config_file},
    resolve::resolve_path,
};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".termweight.toml";

/// Where a config file sits in the precedence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Found in the working directory or one of its ancestors.
    Project,
    /// `~/.termweight.toml`, the lowest-precedence defaults.
    Global,
}

/// Identity of a discovered config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Absolute path to the file.
    pub path: PathBuf,
    /// Project or global.
    pub scope: ConfigScope,
    /// The file sets `root = true`.
    pub root: bool,
}

/// One parsed config file, ready to merge.
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    /// Which file this is.
    pub source: ConfigSource,
    /// Settings as written.
    pub raw: RawConfig,
    /// `[corpus] path`, resolved against the file's directory.
    pub corpus_path: Option<PathBuf>,
    /// `[output] dir`, resolved against the file's directory.
    pub output_dir: Option<PathBuf>,
}

impl ConfigLayer {
    /// Parses the file at `path` and resolves the paths it declares.
    pub fn load(path: PathBuf, scope: ConfigScope) -> Result<Self, ConfigError> {
        let raw = parse_config_file(&path)?;
        Self::from_raw(path, scope, raw)
    }

    /// Builds a layer from settings already parsed from `path`.
    pub fn from_raw(
        path: PathBuf,
        scope: ConfigScope,
        raw: RawConfig,
    ) -> Result<Self, ConfigError> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let corpus_path = raw
            .corpus
            .as_ref()
            .and_then(|corpus| corpus.path.as_deref())
            .map(|p| resolve_path(p, dir))
            .transpose()?;
        let output_dir = raw
            .output
            .as_ref()
            .and_then(|output| output.dir.as_deref())
            .map(|p| resolve_path(p, dir))
            .transpose()?;

        Ok(Self {
            source: ConfigSource {
                root: raw.root == Some(true),
                path,
                scope,
            },
            raw,
            corpus_path,
            output_dir,
        })
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        self.source.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Discovers and parses every config file that applies to `cwd`.
///
/// Layers come back closest first. The home file is tagged [`ConfigScope::Global`]
/// wherever it turns up, and appended last unless a root file was found.
pub fn discover_layers(cwd: &Path) -> Result<Vec<ConfigLayer>, ConfigError> {
    let global = global_config_path();
    let mut layers = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let scope = if global.as_ref() == Some(&path) {
            ConfigScope::Global
        } else {
            ConfigScope::Project
        };
        let layer = ConfigLayer::load(path, scope)?;
        let root = layer.source.root;
        layers.push(layer);
        if root {
            return Ok(layers);
        }
    }

    let seen_global = layers
        .iter()
        .any(|layer| layer.source.scope == ConfigScope::Global);
    if !seen_global
        && let Some(path) = global
        && path.is_file()
    {
        layers.push(ConfigLayer::load(path, ConfigScope::Global)?);
    }

    Ok(layers)
}

/// Returns the path to the global configuration file (`~/.termweight.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
