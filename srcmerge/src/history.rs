//! Run-scoped record of files already emitted.

use std::collections::HashSet;

use crate::path::NormalizedPath;

/// The set of files already emitted during one merge run.
///
/// Entries are kept in the order they were first marked, which is the order
/// the manifest lists them in. A history is owned by the caller and passed
/// by `&mut` into every recursive call, so separate merges in one process
/// never share state.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::path::NormalizedPath;
/// use srcmerge::VisitHistory;
/// use std::path::PathBuf;
///
/// let mut history = VisitHistory::new();
/// let path = NormalizedPath::new(PathBuf::from("/proj/a.h")).unwrap();
/// assert!(history.mark(&path));
/// assert!(!history.mark(&path));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VisitHistory {
    order: Vec<NormalizedPath>,
    seen: HashSet<NormalizedPath>,
}

impl VisitHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as visited.
    ///
    /// Returns `true` if the path was not yet present.
    pub fn mark(&mut self, path: &NormalizedPath) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.order.push(path.clone());
        true
    }

    /// Returns whether `path` has been marked.
    #[must_use]
    pub fn contains(&self, path: &NormalizedPath) -> bool {
        self.seen.contains(path)
    }

    /// Iterate over visited paths in first-visit order.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedPath> {
        self.order.iter()
    }

    /// Number of distinct visited paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consume the history, yielding paths in first-visit order.
    #[must_use]
    pub fn into_vec(self) -> Vec<NormalizedPath> {
        self.order
    }
}
