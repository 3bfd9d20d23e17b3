//! Path resolution for configured corpus and output locations.
//!
//! Resolves relative and tilde-prefixed paths against the directory of the config file
//! that declared them.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use pathdiff::diff_paths;

use crate::ConfigError;

/// Resolves a configured path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/corpus`) - expanded to home directory
/// - Relative paths (`./corpus.txt`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// The path is not required to exist; missing inputs are reported by validation.
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Formats a path for display, relative to `base` when that is shorter to read.
///
/// Falls back to the path as given when no base is supplied or no relative form exists.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|base| diff_paths(path, base))
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("./corpus.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, Path::new("/project/./corpus.txt"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/data/corpus", Path::new("/project")).unwrap();
        assert_eq!(resolved, Path::new("/data/corpus"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = home_dir().unwrap();
        let resolved = resolve_path("~/corpus", Path::new("/project")).unwrap();
        assert_eq!(resolved, home.join("corpus"));
    }

    #[test]
    fn test_resolve_bare_tilde() {
        let home = home_dir().unwrap();
        assert_eq!(resolve_path("~", Path::new("/project")).unwrap(), home);
    }

    #[test]
    fn test_format_relative_to_base() {
        let shown = format_path_for_display(
            Path::new("/project/outputs/idf.csv"),
            Some(Path::new("/project")),
        );
        assert_eq!(shown, Path::new("outputs/idf.csv").display().to_string());
    }

    #[test]
    fn test_format_without_base() {
        let shown = format_path_for_display(Path::new("/project/idf.csv"), None);
        assert_eq!(shown, "/project/idf.csv");
    }
}
