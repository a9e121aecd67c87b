//! Recursive include substitution.
//!
//! The [`Amalgamator`] reads a file, drops once-guard lines, and replaces each
//! quoted include with the recursively amalgamated text of its target. A file
//! is marked in the [`VisitHistory`] before it is read, so every physical file
//! is emitted at most once per run and cyclic includes terminate.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::history::VisitHistory;
use crate::include::{parse_include, OnceGuard};
use crate::output::banner;
use crate::path::{NormalizedPath, PathResolver};

/// Text emitted by one sub-traversal plus the files it touched.
///
/// `touched` starts with the traversal's own file followed by everything
/// reached from it, in discovery order. It is not deduplicated; the history
/// decides what is actually emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amalgamation {
    /// The merged text.
    pub text: String,
    /// Files touched by this traversal, in discovery order.
    pub touched: Vec<NormalizedPath>,
}

impl Amalgamation {
    fn absorb(&mut self, nested: Self) {
        self.text.push_str(&nested.text);
        self.touched.extend(nested.touched);
    }
}

/// Depth-first include substitution over one resolver and guard.
#[derive(Debug, Clone, Copy)]
pub struct Amalgamator<'a> {
    resolver: &'a PathResolver,
    guard: &'a OnceGuard,
}

impl<'a> Amalgamator<'a> {
    /// Create an amalgamator.
    #[must_use]
    pub fn new(resolver: &'a PathResolver, guard: &'a OnceGuard) -> Self {
        Self { resolver, guard }
    }

    /// Amalgamate `file_path`, substituting every quoted include in place.
    ///
    /// - `is_root` marks the file named by the caller. While amalgamating a
    ///   root, an include of the root's own paired header is dropped.
    /// - `pull_implementations` additionally inlines each included header's
    ///   paired implementation right after the header's text.
    ///
    /// A file already present in `history` yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `file_path` or any include target does not
    /// exist, and `ReadError` if a file cannot be read. Sources must be valid
    /// UTF-8; a file with any other byte sequence is a `ReadError` too. The
    /// first error aborts the whole traversal.
    pub fn replace_includes(
        &self,
        file_path: &Path,
        is_root: bool,
        pull_implementations: bool,
        history: &mut VisitHistory,
    ) -> Result<Amalgamation> {
        let path = self.resolver.normalize(file_path)?;
        if !history.mark(&path) {
            log::debug!("already emitted, skipping {path}");
            return Ok(Amalgamation::default());
        }
        log::debug!("amalgamating {path}");

        let contents = fs::read_to_string(path.as_path()).map_err(|source| Error::ReadError {
            path: path.as_path().to_path_buf(),
            source,
        })?;

        let own_header = is_root.then(|| self.resolver.paired_header(path.as_path()));

        let mut result = Amalgamation {
            text: banner::file_banner(&path),
            touched: vec![path.clone()],
        };

        for line in contents.trim().split('\n') {
            if self.guard.matches(line) {
                continue;
            }

            let Some(target) = parse_include(line) else {
                result.text.push_str(line);
                result.text.push('\n');
                continue;
            };
            let target = Path::new(target);

            if let Some(header) = &own_header {
                if self.resolver.same_file(header, target) {
                    log::debug!("{path}: dropping include of its own header {}", target.display());
                    continue;
                }
            }

            let nested = self.replace_includes(target, false, pull_implementations, history)?;
            result.absorb(nested);

            if pull_implementations {
                if let Some(implementation) = self.resolver.find_implementation(target) {
                    log::debug!("pairing {} with {implementation}", target.display());
                    let nested = self.replace_includes(
                        implementation.as_path(),
                        false,
                        pull_implementations,
                        history,
                    )?;
                    result.absorb(nested);
                }
            }
        }

        Ok(result)
    }
}
