//! Same-file comparison by resolved file identity.
//!
//! Two spellings of a path name the same file when they stat to the same
//! device and inode. Text comparison is never used: `./x.h`, `inc/../x.h`
//! and a symlink to `x.h` all compare equal here.

use std::fs;
use std::io;
use std::path::Path;

/// The identity of a physical file.
///
/// Device and inode on Unix; the canonical path elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId {
    #[cfg(unix)]
    dev: u64,
    #[cfg(unix)]
    ino: u64,
    #[cfg(not(unix))]
    canonical: std::path::PathBuf,
}

impl FileId {
    /// Stat `path` and capture its identity.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the path cannot be stat'ed.
    #[cfg(unix)]
    pub fn of(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        let meta = fs::metadata(path)?;
        Ok(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    /// Stat `path` and capture its identity.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the path cannot be canonicalized.
    #[cfg(not(unix))]
    pub fn of(path: &Path) -> io::Result<Self> {
        Ok(Self {
            canonical: fs::canonicalize(path)?,
        })
    }
}

/// Returns whether two paths refer to the same underlying file.
///
/// Returns `false` (never an error) if either path fails to stat.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::path::identity::same_file;
/// use std::path::Path;
///
/// assert!(same_file(Path::new("src/chan.h"), Path::new("src/../src/chan.h")));
/// assert!(!same_file(Path::new("src/chan.h"), Path::new("missing.h")));
/// ```
#[must_use]
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (FileId::of(a), FileId::of(b)) {
        (Ok(id_a), Ok(id_b)) => id_a == id_b,
        _ => false,
    }
}
