//! Core types for path handling.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::identity::FileId;

/// A path that has been normalized to absolute form and verified to exist.
///
/// This is the sole identity key the merge uses for a file. Construction
/// rejects relative paths, paths that still carry `.` or `..` components,
/// and paths that do not stat successfully, so a `NormalizedPath` in hand
/// always names a file that existed when it was built.
///
/// Equality and hashing follow the physical file, not the spelling: two
/// normalized paths reaching one file through different symlinks are equal,
/// and the path kept is the one the value was built from.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::path::NormalizedPath;
/// use std::path::PathBuf;
///
/// let path = NormalizedPath::new(PathBuf::from("/usr/include/stdio.h")).unwrap();
/// assert_eq!(path.file_name(), "stdio.h");
/// ```
#[derive(Debug, Clone)]
pub struct NormalizedPath {
    path: PathBuf,
    id: FileId,
}

impl NormalizedPath {
    /// Create a new normalized path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the path is not absolute or not lexically
    /// clean, and `NotFound` if it does not exist.
    pub fn new(path: PathBuf) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "Path must be absolute after normalization".to_string(),
            });
        }
        // components() already drops interior `.`, so only `..` can survive.
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(Error::InvalidPath {
                path,
                reason: "Path still contains '..' components".to_string(),
            });
        }
        match FileId::of(&path) {
            Ok(id) => Ok(Self { path, id }),
            Err(_) => Err(Error::NotFound { path }),
        }
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// The final component of the path, lossily converted to UTF-8.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The extension including its leading dot, or an empty string.
    #[must_use]
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

impl PartialEq for NormalizedPath {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NormalizedPath {}

impl Hash for NormalizedPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
