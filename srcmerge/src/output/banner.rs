//! Banner and manifest text for merged output.

use crate::path::NormalizedPath;

/// Full-width comment line delimiting blocks.
pub const SEPARATOR: &str = "// #######################################################\n";

/// Prefix of every banner comment line.
pub const COMMENT_PREFIX: &str = "// ## ";

/// Message heading the manifest.
pub const MANIFEST_MESSAGE: &str = "Generated by srcmerge from the following files:\n";

/// The banner opening a file's block: separator, `// ## <name>`, separator,
/// blank line.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::output::banner::file_banner;
/// use srcmerge::path::NormalizedPath;
/// use std::path::PathBuf;
///
/// let path = NormalizedPath::new(PathBuf::from("/proj/chan.h")).unwrap();
/// assert!(file_banner(&path).contains("// ## chan.h\n"));
/// ```
#[must_use]
pub fn file_banner(path: &NormalizedPath) -> String {
    format!(
        "{SEPARATOR}{COMMENT_PREFIX}{}\n{SEPARATOR}\n",
        path.file_name()
    )
}

/// The manifest block listing every consumed file by base name, in the
/// order given.
#[must_use]
pub fn manifest<'a>(files: impl IntoIterator<Item = &'a NormalizedPath>) -> String {
    let mut text = format!("{SEPARATOR}{COMMENT_PREFIX}{MANIFEST_MESSAGE}");
    for path in files {
        text.push_str(COMMENT_PREFIX);
        text.push_str("  ");
        text.push_str(&path.file_name());
        text.push('\n');
    }
    text.push_str(SEPARATOR);
    text.push('\n');
    text
}
