//! Path resolution against a fixed base directory.
//!
//! This module provides the `PathResolver` type, which is the main interface
//! the merge uses for turning include targets into file identities and for
//! pairing headers with their implementation files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::schema::{DEFAULT_HEADER_EXTENSION, DEFAULT_IMPLEMENTATION_EXTENSIONS};
use crate::error::{Error, Result};
use crate::path::types::NormalizedPath;
use crate::path::{identity, normalize};

/// Resolves paths relative to the root file's directory.
///
/// Every relative path, whichever file it was written in, is resolved against
/// the same base directory: the directory containing the root file.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new("/proj/src")
///     .unwrap()
///     .with_implementation_extensions(vec![".c".into(), ".cc".into()]);
///
/// // Looks for /proj/src/chan.c, then /proj/src/chan.cc
/// let paired = resolver.find_implementation(Path::new("chan.h"));
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
    implementation_extensions: Vec<String>,
    header_extension: String,
}

impl PathResolver {
    /// Create a resolver rooted at `base_dir`.
    ///
    /// A relative `base_dir` is first made absolute against the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_dir` cannot be normalized.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = normalize::normalize_from_cwd(base_dir.as_ref())?;
        Ok(Self {
            base_dir,
            implementation_extensions: DEFAULT_IMPLEMENTATION_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            header_extension: DEFAULT_HEADER_EXTENSION.to_string(),
        })
    }

    /// Create a resolver for a root file, returning the root's normalized path.
    ///
    /// The base directory becomes the root file's containing directory.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the root file does not exist.
    pub fn for_root(root: &Path) -> Result<(Self, NormalizedPath)> {
        let cleaned = normalize::normalize_from_cwd(root)?;
        let root = NormalizedPath::new(cleaned)?;
        let base_dir = root
            .as_path()
            .parent()
            .ok_or_else(|| Error::InvalidPath {
                path: root.as_path().to_path_buf(),
                reason: "Root file has no containing directory".to_string(),
            })?
            .to_path_buf();
        let resolver = Self::new(base_dir)?;
        Ok((resolver, root))
    }

    /// Set the implementation extensions, in priority order.
    #[must_use]
    pub fn with_implementation_extensions(mut self, extensions: Vec<String>) -> Self {
        self.implementation_extensions = extensions;
        self
    }

    /// Set the header extension used to pair a root implementation with its header.
    #[must_use]
    pub fn with_header_extension(mut self, extension: impl Into<String>) -> Self {
        self.header_extension = extension.into();
        self
    }

    /// The directory relative paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The configured implementation extensions, in priority order.
    #[must_use]
    pub fn implementation_extensions(&self) -> &[String] {
        &self.implementation_extensions
    }

    /// Normalize `path` and confirm it exists.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the path does not resolve to an existing file.
    pub fn normalize(&self, path: &Path) -> Result<NormalizedPath> {
        normalize::normalize_existing(path, &self.base_dir)
    }

    /// Returns whether two paths, each resolved against the base directory,
    /// are the same physical file. Never fails.
    #[must_use]
    pub fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (
            normalize::normalize(a, &self.base_dir),
            normalize::normalize(b, &self.base_dir),
        ) {
            (Ok(a), Ok(b)) => identity::same_file(&a, &b),
            _ => false,
        }
    }

    /// Find the implementation file paired with `header`.
    ///
    /// Tries each implementation extension in priority order against the
    /// header's extension-less path and returns the first that exists.
    /// Absence is a normal outcome for header-only files.
    #[must_use]
    pub fn find_implementation(&self, header: &Path) -> Option<NormalizedPath> {
        self.implementation_extensions
            .iter()
            .find_map(|ext| self.normalize(&with_suffix(header, ext)).ok())
    }

    /// The header path paired with `implementation` (same stem, header extension).
    #[must_use]
    pub fn paired_header(&self, implementation: &Path) -> PathBuf {
        with_suffix(implementation, &self.header_extension)
    }
}

/// Replace the extension of `path` with `suffix` by plain concatenation onto
/// the extension-less path.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut stem: OsString = strip_extension(path).into_os_string();
    stem.push(suffix);
    PathBuf::from(stem)
}

fn strip_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(_) => path.with_extension(""),
        None => path.to_path_buf(),
    }
}
