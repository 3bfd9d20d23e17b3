//! Scratch project trees for termweight-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::{CONFIG_FILENAME, ConfigLayer, ConfigScope, discover_layers};

/// A temporary directory holding corpora and `.termweight.toml` files.
pub struct Tree {
    /// Removed on drop.
    root: TempDir,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` and its parents as directories.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a file at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a `.termweight.toml` in `rel` (`""` for the tree root).
    pub fn config(&self, rel: &str, toml: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, toml).unwrap();
        path
    }

    /// Project-scoped layers discovered from `rel`, ignoring any home config.
    pub fn project_layers(&self, rel: &str) -> Vec<ConfigLayer> {
        discover_layers(&self.path().join(rel))
            .unwrap()
            .into_iter()
            .filter(|layer| layer.source.scope == ConfigScope::Project)
            .collect()
    }
}
