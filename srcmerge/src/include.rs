//! Line classification for quoted includes and once-guards.
//!
//! Classification is stateless and line-local: no lookback, no lookahead,
//! no knowledge of comments, string literals, or macros. An `#include "x.h"`
//! inside a comment is still reported as an include.

use std::fmt;

use crate::error::{Error, Result};

const INCLUDE_TOKEN: &str = "#include";

/// Returns the quoted target of an `#include "target"` line.
///
/// The trimmed line must start with `#include`, split on `"` into at least
/// three segments, and have exactly `#include` (after trimming) before the
/// first quote. The target is returned verbatim, not normalized. An empty
/// target is treated as no include.
///
/// # Examples
///
/// ```
/// use srcmerge::include::parse_include;
///
/// assert_eq!(parse_include(r#"  #include "eb_chan.h""#), Some("eb_chan.h"));
/// assert_eq!(parse_include("#include <stdio.h>"), None);
/// assert_eq!(parse_include("int x;"), None);
/// ```
#[must_use]
pub fn parse_include(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with(INCLUDE_TOKEN) {
        return None;
    }

    let mut parts = trimmed.split('"');
    let before = parts.next()?;
    let target = parts.next()?;
    parts.next()?;

    if before.trim() != INCLUDE_TOKEN || target.is_empty() {
        return None;
    }
    Some(target)
}

/// A two-token directive line that is stripped from merged output.
///
/// # Examples
///
/// ```
/// use srcmerge::include::OnceGuard;
///
/// let guard = OnceGuard::default();
/// assert!(guard.matches("  #pragma   once"));
/// assert!(!guard.matches("#pragma pack(1)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnceGuard {
    first: String,
    second: String,
}

impl OnceGuard {
    /// Parse a guard from its directive text, e.g. `#pragma once`.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the text is exactly two
    /// whitespace-separated tokens.
    pub fn parse(directive: &str) -> Result<Self> {
        let tokens: Vec<&str> = directive.split_whitespace().collect();
        match tokens.as_slice() {
            [first, second] => Ok(Self {
                first: (*first).to_string(),
                second: (*second).to_string(),
            }),
            _ => Err(Error::Validation {
                field: "once_guard".into(),
                message: format!("expected two tokens, found {}: '{directive}'", tokens.len()),
            }),
        }
    }

    /// Returns whether the first two whitespace-delimited tokens of `line`
    /// equal the guard's tokens exactly.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        let mut tokens = line.split_whitespace();
        tokens.next() == Some(self.first.as_str()) && tokens.next() == Some(self.second.as_str())
    }
}

impl Default for OnceGuard {
    fn default() -> Self {
        Self {
            first: "#pragma".to_string(),
            second: "once".to_string(),
        }
    }
}

impl fmt::Display for OnceGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
