//! Two-pass merge of a root header into one translation unit.
//!
//! Pass one amalgamates the root header without implementations and records
//! every header it reaches. Pass two amalgamates the root's implementation
//! file and then the implementation paired with each recorded header. Both
//! passes share one [`VisitHistory`], so no file is emitted twice across the
//! whole output.

use std::path::Path;

use crate::amalgamate::Amalgamator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::history::VisitHistory;
use crate::include::OnceGuard;
use crate::output::{banner, FileEntry, FileKind};
use crate::path::{NormalizedPath, PathResolver};

/// The result of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutput {
    /// Every consumed file, in first-visit order.
    pub files: Vec<NormalizedPath>,
    /// The merged header region.
    pub header: String,
    /// The merged implementation region.
    pub implementation: String,
    implementation_extensions: Vec<String>,
}

impl MergeOutput {
    /// The manifest block listing every consumed file.
    #[must_use]
    pub fn manifest(&self) -> String {
        banner::manifest(&self.files)
    }

    /// Manifest, header region, and implementation region, in that order.
    ///
    /// A blank line separates the two regions when an implementation region
    /// exists.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = self.manifest();
        text.push_str(&self.header);
        if !self.implementation.is_empty() {
            text.push('\n');
            text.push_str(&self.implementation);
        }
        text
    }

    /// Consumed files as list entries, classified by extension.
    #[must_use]
    pub fn entries(&self) -> Vec<FileEntry> {
        self.files
            .iter()
            .map(|path| {
                let kind = if self
                    .implementation_extensions
                    .iter()
                    .any(|ext| *ext == path.extension())
                {
                    FileKind::Implementation
                } else {
                    FileKind::Header
                };
                FileEntry {
                    path: path.as_path().to_path_buf(),
                    name: path.file_name(),
                    kind,
                }
            })
            .collect()
    }
}

/// Drives the two-pass merge.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::{Config, Merger};
/// use std::path::Path;
///
/// let output = Merger::new(Config::with_defaults())
///     .merge(Path::new("src/eb_chan.h"))
///     .unwrap();
/// print!("{}", output.render());
/// ```
#[derive(Debug, Clone)]
pub struct Merger {
    config: Config,
}

impl Merger {
    /// Create a merger using `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Merge the root header at `root`.
    ///
    /// Relative include targets anywhere in the tree are resolved against
    /// the root header's directory.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `ReadError` from any file in the tree, a
    /// validation error for a malformed once-guard, and
    /// `NoImplementationFound` when a root implementation is required but
    /// absent. Nothing is returned on failure.
    pub fn merge(&self, root: &Path) -> Result<MergeOutput> {
        let (resolver, root) = PathResolver::for_root(root)?;
        let resolver = resolver
            .with_implementation_extensions(self.config.effective_implementation_extensions())
            .with_header_extension(self.config.effective_header_extension());
        let guard = OnceGuard::parse(self.config.effective_once_guard())?;
        let amalgamator = Amalgamator::new(&resolver, &guard);
        let mut history = VisitHistory::new();

        log::info!("merging {root} (base {})", resolver.base_dir().display());

        let header = amalgamator.replace_includes(root.as_path(), true, false, &mut history)?;

        let mut implementation = String::new();
        match resolver.find_implementation(root.as_path()) {
            Some(path) => {
                let root_impl =
                    amalgamator.replace_includes(path.as_path(), true, true, &mut history)?;
                implementation.push_str(&root_impl.text);
            }
            None if self.config.effective_require_implementation() => {
                return Err(Error::NoImplementationFound {
                    header: root.into_path_buf(),
                });
            }
            None => log::info!("{root} has no implementation file"),
        }

        for header_path in &header.touched {
            if let Some(path) = resolver.find_implementation(header_path.as_path()) {
                let paired =
                    amalgamator.replace_includes(path.as_path(), true, true, &mut history)?;
                implementation.push_str(&paired.text);
            }
        }

        log::info!("merged {} files", history.len());

        Ok(MergeOutput {
            files: history.into_vec(),
            header: header.text,
            implementation,
            implementation_extensions: resolver.implementation_extensions().to_vec(),
        })
    }
}
