//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Converting relative paths to absolute paths against a base directory
//! - Resolving `.` and `..` components
//!
//! Normalization is purely lexical. [`normalize_existing`] adds the existence
//! check that turns a cleaned path into a [`NormalizedPath`]. Include targets
//! never get tilde expansion: `~old.h` and `~/x.h` are ordinary relative
//! names. Only paths typed by a user go through [`expand_tilde`].

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::NormalizedPath;

/// Expand tilde (~) to the home directory in a user-supplied path.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
/// [`normalize`] does not call it.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use srcmerge::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/include")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("include"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("src/chan.h")).unwrap();
/// assert_eq!(expanded, Path::new("src/chan.h"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in a path.
///
/// A `..` at the root stays at the root, the way `/..` names `/` on disk.
///
/// # Errors
///
/// Returns an error if a relative path has more `..` components than normal
/// components to cancel them.
///
/// # Examples
///
/// ```
/// use srcmerge::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if result.file_name().is_some() {
                    result.pop();
                } else if !has_root {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path to absolute form against `base`.
///
/// Relative paths are joined onto `base`, then `.` and `..` components are
/// resolved. A leading `~` is kept as a literal name.
///
/// # Errors
///
/// Returns an error if component resolution fails.
///
/// # Examples
///
/// ```
/// use srcmerge::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("../lib/./x.h"), Path::new("/proj/src")).unwrap();
/// assert_eq!(normalized, Path::new("/proj/lib/x.h"));
/// ```
pub fn normalize(path: &Path, base: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    resolve_components(&absolute)
}

/// Normalize a path against the process's current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or
/// normalization fails.
pub fn normalize_from_cwd(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    normalize(path, &cwd)
}

/// Normalize a path against `base` and confirm it exists on disk.
///
/// # Errors
///
/// Returns `NotFound` if the cleaned path does not stat successfully.
pub fn normalize_existing(path: &Path, base: &Path) -> Result<NormalizedPath> {
    let cleaned = normalize(path, base)?;
    NormalizedPath::new(cleaned)
}
